// * Injectable "is networking disabled" signal consulted before status checks

pub trait NetworkingProbe: Send + Sync {
    fn is_networking_disabled(&self) -> bool;
}

// * Default probe: no host-level signal is wired yet, networking counts as enabled
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysEnabled;

impl NetworkingProbe for AlwaysEnabled {
    fn is_networking_disabled(&self) -> bool {
        false
    }
}

impl<F> NetworkingProbe for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_networking_disabled(&self) -> bool {
        self()
    }
}
