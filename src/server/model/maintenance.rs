/// Outcome of one maintenance sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepReport {
    /// Starships reset from `loading` to `available`.
    pub released_starships: u64,
    /// Stale `loading` shipments marked `failed` with their cargo returned.
    pub failed_shipments: u64,
    /// History rows deleted for being past retention.
    pub purged_shipments: u64,
}
