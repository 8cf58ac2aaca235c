use crate::amount::{Amount, AmountError, Shape};
use crate::amount::error::check_shapes;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JobKind {
    /// Picks up and/or delivers on its own.
    Single,
    /// Loads a shipment that a later `ShipmentDelivery` unloads.
    ShipmentPickup,
    ShipmentDelivery,
}

/// A stop's contribution to the vehicle load.
#[derive(Clone, Debug)]
pub struct Job {
    kind: JobKind,
    pickup: Amount,
    delivery: Amount,
}

impl Job {
    pub fn single(pickup: Amount, delivery: Amount) -> Self {
        Self {
            kind: JobKind::Single,
            pickup,
            delivery,
        }
    }

    pub fn shipment_pickup(amount: Amount) -> Self {
        let delivery = amount.zeroed();
        Self {
            kind: JobKind::ShipmentPickup,
            pickup: amount,
            delivery,
        }
    }

    pub fn shipment_delivery(amount: Amount) -> Self {
        let pickup = amount.zeroed();
        Self {
            kind: JobKind::ShipmentDelivery,
            pickup,
            delivery: amount,
        }
    }

    pub fn kind(&self) -> JobKind {
        self.kind
    }

    pub fn pickup(&self) -> &Amount {
        &self.pickup
    }

    pub fn delivery(&self) -> &Amount {
        &self.delivery
    }

    pub fn check_shape(&self, expected: Shape) -> Result<(), AmountError> {
        check_shapes(expected, self.pickup.shape())?;
        check_shapes(expected, self.delivery.shape())
    }
}
