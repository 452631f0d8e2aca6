/// Messages specific to StatsState
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMsg {
    AddStars(u64),
}
