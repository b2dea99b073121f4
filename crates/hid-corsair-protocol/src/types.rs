//! Corsair headset model classification.

#![deny(static_mut_refs)]

use crate::ids::product_ids;
use headsetctl_hid_common::Capabilities;

/// Corsair headset model classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsairModel {
    /// HS70 wireless (sidetone, battery, notification sounds).
    Hs70,
    /// Unknown or future Corsair product.
    Unknown,
}

impl CorsairModel {
    /// Classify a device by its product ID.
    pub fn from_product_id(product_id: u16) -> Self {
        match product_id {
            product_ids::HS70 => Self::Hs70,
            _ => Self::Unknown,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Hs70 => "Corsair HS70",
            Self::Unknown => "Corsair (unknown)",
        }
    }

    /// Capabilities this driver implements for the model.
    pub fn capabilities(self) -> Capabilities {
        match self {
            Self::Hs70 => {
                Capabilities::SIDETONE
                    | Capabilities::BATTERY_STATUS
                    | Capabilities::NOTIFICATION_SOUND
            }
            Self::Unknown => Capabilities::empty(),
        }
    }
}

/// Return `true` if the product ID is a Corsair headset this crate drives.
pub fn is_headset_product(product_id: u16) -> bool {
    CorsairModel::from_product_id(product_id) != CorsairModel::Unknown
}
