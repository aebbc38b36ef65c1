//! Preview device simulation for the read-only preview mode.

use serde::{Deserialize, Serialize};

/// Simulated viewport for the preview frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewDevice {
    /// 375px wide phone frame.
    Mobile,
    /// 768px wide tablet frame.
    Tablet,
    /// Full-width frame.
    #[default]
    Desktop,
}

impl PreviewDevice {
    /// Frame width in pixels; `None` means full width.
    #[must_use]
    pub const fn width_px(self) -> Option<u32> {
        match self {
            Self::Mobile => Some(375),
            Self::Tablet => Some(768),
            Self::Desktop => None,
        }
    }

    /// CSS width for the frame container.
    #[must_use]
    pub fn css_width(self) -> String {
        match self.width_px() {
            Some(px) => format!("{px}px"),
            None => "100%".to_string(),
        }
    }
}

/// Local state of the preview screen: just the chosen device.
///
/// Device choice is plain UI state - a pure rendering parameter with no
/// persistence requirement and no effect on block data. Everything shown
/// in preview mode is read-only; selection and update handlers do not
/// exist here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewMode {
    device: PreviewDevice,
}

impl PreviewMode {
    /// Open preview mode at the default desktop width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The chosen device.
    #[must_use]
    pub fn device(&self) -> PreviewDevice {
        self.device
    }

    /// Switch the simulated device.
    pub fn set_device(&mut self, device: PreviewDevice) {
        self.device = device;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_widths() {
        assert_eq!(PreviewDevice::Mobile.width_px(), Some(375));
        assert_eq!(PreviewDevice::Tablet.width_px(), Some(768));
        assert_eq!(PreviewDevice::Desktop.width_px(), None);
        assert_eq!(PreviewDevice::Mobile.css_width(), "375px");
        assert_eq!(PreviewDevice::Desktop.css_width(), "100%");
    }

    #[test]
    fn test_device_switch_is_plain_state() {
        let mut preview = PreviewMode::new();
        assert_eq!(preview.device(), PreviewDevice::Desktop);

        preview.set_device(PreviewDevice::Mobile);
        assert_eq!(preview.device(), PreviewDevice::Mobile);
    }
}
