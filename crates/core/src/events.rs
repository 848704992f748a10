bitflags::bitflags! {
    /// What happened during one input action or one frame.
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Events: u16 {
        const JUMPED        = 1 << 0;
        const LANDED_SHELF  = 1 << 1;
        const LANDED_GROUND = 1 << 2;
        const GAP_REVEALED  = 1 << 3;
        const FELL          = 1 << 4;
        const WON           = 1 << 5;
        const WIN_POPUP     = 1 << 6;
        const RESPAWNED     = 1 << 7;
    }
}
