pub(crate) const WINDOW_MINIMIZE: &[u8] =
    include_bytes!("../assets/svg/minimize.svg");
pub(crate) const WINDOW_MAXIMIZE: &[u8] =
    include_bytes!("../assets/svg/maximize.svg");
pub(crate) const WINDOW_RESTORE: &[u8] =
    include_bytes!("../assets/svg/restore.svg");
pub(crate) const WINDOW_CLOSE: &[u8] =
    include_bytes!("../assets/svg/close.svg");
