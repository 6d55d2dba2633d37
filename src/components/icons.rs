//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCircleCheck as Positive, LuCircleX as Negative, LuMonitor as Desktop,
        LuRotateCcw as Reset, LuServer as Node, LuShield as Signer, LuSmartphone as Mobile,
        LuTriangleAlert as Warning, LuWallet as Wallet,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsCheckCircleFill as Positive, BsDisplay as Desktop,
        BsExclamationTriangleFill as Warning, BsHddNetwork as Node, BsPhone as Mobile,
        BsShieldLock as Signer, BsWallet2 as Wallet, BsXCircleFill as Negative,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(RESET, Reset);
themed_icon!(POSITIVE, Positive);
themed_icon!(NEGATIVE, Negative);
themed_icon!(WARNING, Warning);
themed_icon!(SIGNER, Signer);
themed_icon!(WALLET, Wallet);
themed_icon!(NODE, Node);
themed_icon!(MOBILE, Mobile);
themed_icon!(DESKTOP, Desktop);
