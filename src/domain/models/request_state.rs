#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    Failure,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Completed(RequestOutcome),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        return *self == RequestState::InFlight;
    }
}
