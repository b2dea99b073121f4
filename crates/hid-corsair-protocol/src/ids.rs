//! Corsair USB vendor/product IDs and command bytes.

#![deny(static_mut_refs)]

/// Corsair USB vendor ID.
pub const CORSAIR_VENDOR_ID: u16 = 0x1B1C;

/// Known Corsair headset product IDs.
pub mod product_ids {
    /// HS70 wireless gaming headset.
    pub const HS70: u16 = 0x0A38;
}

/// Command bytes (first byte of an output report).
pub mod commands {
    /// Request a battery status frame.
    pub const BATTERY_REQUEST: u8 = 0xC9;
    /// Play a built-in notification sound.
    pub const NOTIFICATION_SOUND: u8 = 0xCA;
}

/// Fixed argument carried after [`commands::BATTERY_REQUEST`].
pub const BATTERY_REQUEST_ARG: u8 = 0x64;

/// Fixed argument carried after [`commands::NOTIFICATION_SOUND`].
pub const NOTIFICATION_SOUND_ARG: u8 = 0x02;
