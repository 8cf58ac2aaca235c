use super::job::{Job, JobKind};
use crate::amount::{Amount, AmountError};

use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error("shipment pickups and deliveries do not cancel out, {residual} left on board")]
    UnbalancedShipments { residual: Amount },
    #[error("shipment delivery at rank {rank} has no earlier pickup")]
    DeliveryBeforePickup { rank: usize },
    #[error("rank range {first}..{last} out of bounds for {len} stops")]
    RankOutOfRange { first: usize, last: usize, len: usize },
}

/// Loads carried along a sequence of `n` stops.
///
/// Ranks index jobs (`0..n`). Steps index positions along the sequence
/// (`0..n + 2`): step 0 is the start, step `r + 1` follows the job at
/// rank `r` and step `n + 1` is the end.
///
/// Per-rank and per-step accessors index like slices and panic when the
/// rank or step is out of bounds. Range sums validate their bounds and
/// return [`LoadError::RankOutOfRange`].
///
/// Single jobs delivering goods have them on board from the start; single
/// jobs picking up keep them until the end. Shipments are loaded at their
/// pickup and unloaded at their delivery.
#[derive(Clone, Debug)]
pub struct LoadProfile {
    capacity: Amount,
    zero: Amount,

    // Single job pickups/deliveries up to rank i (included).
    fwd_pickups: Vec<Amount>,
    fwd_deliveries: Vec<Amount>,

    // Single job deliveries/pickups pending after rank i.
    bwd_deliveries: Vec<Amount>,
    bwd_pickups: Vec<Amount>,

    // Shipment load at rank i (included).
    pd_loads: Vec<Amount>,

    // Shipment pickups/deliveries up to rank i (included).
    nb_pickups: Vec<usize>,
    nb_deliveries: Vec<usize>,

    // Per step.
    current_loads: Vec<Amount>,
    fwd_peaks: Vec<Amount>,
    bwd_peaks: Vec<Amount>,

    delivery_margin: Amount,
    pickup_margin: Amount,
}

impl LoadProfile {
    /// An empty sequence for a vehicle of the given capacity.
    pub fn new(capacity: Amount) -> Self {
        let zero = capacity.zeroed();
        Self {
            fwd_pickups: Vec::new(),
            fwd_deliveries: Vec::new(),
            bwd_deliveries: Vec::new(),
            bwd_pickups: Vec::new(),
            pd_loads: Vec::new(),
            nb_pickups: Vec::new(),
            nb_deliveries: Vec::new(),
            current_loads: vec![zero.clone(); 2],
            fwd_peaks: vec![zero.clone(); 2],
            bwd_peaks: vec![zero.clone(); 2],
            delivery_margin: capacity.clone(),
            pickup_margin: capacity.clone(),
            capacity,
            zero,
        }
    }

    /// Recomputes every load for `jobs`, in visiting order.
    ///
    /// On error the previous state is left untouched.
    pub fn update(&mut self, jobs: &[Job]) -> Result<(), LoadError> {
        let shape = self.zero.shape();
        for job in jobs {
            job.check_shape(shape)?;
        }

        let n = jobs.len();
        let steps = n + 2;

        // Forward pass.
        let mut fwd_pickups = Vec::with_capacity(n);
        let mut fwd_deliveries = Vec::with_capacity(n);
        let mut pd_loads = Vec::with_capacity(n);
        let mut nb_pickups = Vec::with_capacity(n);
        let mut nb_deliveries = Vec::with_capacity(n);

        let mut pickups = self.zero.clone();
        let mut deliveries = self.zero.clone();
        let mut pd_load = self.zero.clone();
        let mut pickup_count = 0;
        let mut delivery_count = 0;

        for (rank, job) in jobs.iter().enumerate() {
            match job.kind() {
                JobKind::Single => {
                    pickups += job.pickup();
                    deliveries += job.delivery();
                }
                JobKind::ShipmentPickup => {
                    pd_load += job.pickup();
                    pickup_count += 1;
                }
                JobKind::ShipmentDelivery => {
                    pd_load -= job.delivery();
                    delivery_count += 1;
                    if delivery_count > pickup_count {
                        warn!("Shipment delivery at rank {} precedes its pickup", rank);
                        return Err(LoadError::DeliveryBeforePickup { rank });
                    }
                }
            }
            fwd_pickups.push(pickups.clone());
            fwd_deliveries.push(deliveries.clone());
            pd_loads.push(pd_load.clone());
            nb_pickups.push(pickup_count);
            nb_deliveries.push(delivery_count);
        }

        if pd_load != self.zero {
            warn!("Unbalanced shipments over {} stops, residual load {}", n, pd_load);
            return Err(LoadError::UnbalancedShipments { residual: pd_load });
        }

        // Backward pass.
        let mut bwd_deliveries = vec![self.zero.clone(); n];
        let mut bwd_pickups = vec![self.zero.clone(); n];
        let mut current_loads = vec![self.zero.clone(); steps];
        let mut bwd_peaks = vec![self.zero.clone(); steps];

        current_loads[steps - 1] = pickups.clone();
        bwd_peaks[steps - 1] = pickups.clone();

        let mut pending_deliveries = self.zero.clone();
        let mut later_pickups = self.zero.clone();

        for (rank, job) in jobs.iter().enumerate().rev() {
            bwd_deliveries[rank] = pending_deliveries.clone();
            bwd_pickups[rank] = later_pickups.clone();

            let step = rank + 1;
            current_loads[step] = &fwd_pickups[rank] + &pd_loads[rank];
            current_loads[step] += &pending_deliveries;

            if job.kind() == JobKind::Single {
                pending_deliveries += job.delivery();
                later_pickups += job.pickup();
            }

            let mut peak = bwd_peaks[step + 1].clone();
            peak.update_to_maxed(&current_loads[step]);
            bwd_peaks[step] = peak;
        }

        current_loads[0] = pending_deliveries.clone();
        let mut start_peak = bwd_peaks[1].clone();
        start_peak.update_to_maxed(&current_loads[0]);
        bwd_peaks[0] = start_peak;

        let mut fwd_peaks = Vec::with_capacity(steps);
        let mut peak = current_loads[0].clone();
        fwd_peaks.push(peak.clone());
        for load in &current_loads[1..] {
            peak.update_to_maxed(load);
            fwd_peaks.push(peak.clone());
        }

        for (step, load) in current_loads.iter().enumerate() {
            trace!("Step {}: load {}", step, load);
        }

        self.delivery_margin = &self.capacity - &pending_deliveries;
        self.pickup_margin = &self.capacity - &pickups;
        self.fwd_pickups = fwd_pickups;
        self.fwd_deliveries = fwd_deliveries;
        self.bwd_deliveries = bwd_deliveries;
        self.bwd_pickups = bwd_pickups;
        self.pd_loads = pd_loads;
        self.nb_pickups = nb_pickups;
        self.nb_deliveries = nb_deliveries;
        self.current_loads = current_loads;
        self.fwd_peaks = fwd_peaks;
        self.bwd_peaks = bwd_peaks;

        debug!("Load profile updated: {} stops, max load {}", n, self.max_load());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fwd_pickups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fwd_pickups.is_empty()
    }

    pub fn capacity(&self) -> &Amount {
        &self.capacity
    }

    pub fn zero(&self) -> &Amount {
        &self.zero
    }

    /// Componentwise peak over the whole sequence.
    pub fn max_load(&self) -> &Amount {
        &self.fwd_peaks[self.fwd_peaks.len() - 1]
    }

    pub fn job_deliveries_sum(&self) -> &Amount {
        &self.current_loads[0]
    }

    pub fn job_pickups_sum(&self) -> &Amount {
        self.fwd_pickups.last().unwrap_or(&self.zero)
    }

    /// Capacity minus the single job deliveries loaded at the start.
    pub fn delivery_margin(&self) -> &Amount {
        &self.delivery_margin
    }

    /// Capacity minus the single job pickups carried to the end.
    pub fn pickup_margin(&self) -> &Amount {
        &self.pickup_margin
    }

    /// # Panics
    ///
    /// If `step > self.len() + 1`.
    pub fn load_at_step(&self, step: usize) -> &Amount {
        &self.current_loads[step]
    }

    /// Peak load up to `step` (included).
    ///
    /// # Panics
    ///
    /// If `step > self.len() + 1`.
    pub fn fwd_peak(&self, step: usize) -> &Amount {
        &self.fwd_peaks[step]
    }

    /// Peak load from `step` (included) to the end.
    ///
    /// # Panics
    ///
    /// If `step > self.len() + 1`.
    pub fn bwd_peak(&self, step: usize) -> &Amount {
        &self.bwd_peaks[step]
    }

    /// Single job pickups up to `rank` (included). The per-rank sums below
    /// all panic if `rank >= self.len()`.
    pub fn fwd_pickups(&self, rank: usize) -> &Amount {
        &self.fwd_pickups[rank]
    }

    pub fn fwd_deliveries(&self, rank: usize) -> &Amount {
        &self.fwd_deliveries[rank]
    }

    pub fn bwd_pickups(&self, rank: usize) -> &Amount {
        &self.bwd_pickups[rank]
    }

    pub fn bwd_deliveries(&self, rank: usize) -> &Amount {
        &self.bwd_deliveries[rank]
    }

    pub fn shipment_load(&self, rank: usize) -> &Amount {
        &self.pd_loads[rank]
    }

    /// Sum of single job pickups for ranks in `first..last`.
    pub fn pickup_in_range(&self, first: usize, last: usize) -> Result<Amount, LoadError> {
        self.sum_in_range(&self.fwd_pickups, first, last)
    }

    /// Sum of single job deliveries for ranks in `first..last`.
    pub fn delivery_in_range(&self, first: usize, last: usize) -> Result<Amount, LoadError> {
        self.sum_in_range(&self.fwd_deliveries, first, last)
    }

    fn sum_in_range(
        &self,
        fwd_sums: &[Amount],
        first: usize,
        last: usize,
    ) -> Result<Amount, LoadError> {
        if first > last || last > fwd_sums.len() {
            return Err(LoadError::RankOutOfRange {
                first,
                last,
                len: fwd_sums.len(),
            });
        }

        Ok(match (first, last) {
            (f, l) if f == l => self.zero.clone(),
            (0, l) => fwd_sums[l - 1].clone(),
            (f, l) => &fwd_sums[l - 1] - &fwd_sums[f - 1],
        })
    }

    /// A shipment picked up at or before `rank` is still on board after it.
    ///
    /// # Panics
    ///
    /// If `rank >= self.len()`, as for the other shipment queries.
    pub fn has_pending_delivery_after_rank(&self, rank: usize) -> bool {
        self.nb_deliveries[rank] < self.nb_pickups[rank]
    }

    /// A shipment delivery happens after `rank`.
    pub fn has_delivery_after_rank(&self, rank: usize) -> bool {
        let total = self.nb_deliveries.last().copied().unwrap_or(0);
        self.nb_deliveries[rank] < total
    }

    /// A shipment pickup happens at or before `rank`.
    pub fn has_pickup_up_to_rank(&self, rank: usize) -> bool {
        0 < self.nb_pickups[rank]
    }
}
