pub mod capacity;
