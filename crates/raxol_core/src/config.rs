//! Construction-time configuration (spec §6 "Configuration").

use crate::model::color::Color;

/// Construction-time error: the only place this crate returns a `Result`,
/// since `feed_bytes`/`key_to_bytes` are total over their input (spec §7).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("rows must be > 0")]
    ZeroRows,
    #[error("cols must be > 0")]
    ZeroCols,
}

/// Recognized construction options and their effects, per spec §6.
#[derive(Debug, Clone)]
pub struct Config {
    pub rows: u16,
    pub cols: u16,
    pub scrollback_capacity: u32,
    pub initial_palette: [(u8, u8, u8); 256],
    pub default_fg: Color,
    pub default_bg: Color,
    pub osc_payload_limit: u32,
    pub dcs_payload_limit: u32,
    pub reflow_on_resize: bool,
}

impl Config {
    /// Start building a `Config` for the required `rows`/`cols`, with all
    /// other fields at their spec-mandated defaults.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            scrollback_capacity: 2000,
            initial_palette: xterm_256_palette(),
            default_fg: Color::Default,
            default_bg: Color::Default,
            osc_payload_limit: 4096,
            dcs_payload_limit: 65536,
            reflow_on_resize: true,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        Ok(())
    }
}

/// The standard 16 ANSI colors followed by the 6x6x6 color cube and the
/// 24-step grayscale ramp, per the xterm 256-color palette.
#[must_use]
pub fn xterm_256_palette() -> [(u8, u8, u8); 256] {
    const ANSI_16: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (205, 0, 0),
        (0, 205, 0),
        (205, 205, 0),
        (0, 0, 238),
        (205, 0, 205),
        (0, 205, 205),
        (229, 229, 229),
        (127, 127, 127),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (92, 92, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];
    let mut palette = [(0u8, 0u8, 0u8); 256];
    palette[..16].copy_from_slice(&ANSI_16);

    const STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    let mut idx = 16usize;
    for r in STEPS {
        for g in STEPS {
            for b in STEPS {
                palette[idx] = (r, g, b);
                idx += 1;
            }
        }
    }
    for step in 0..24u8 {
        let level = 8 + step * 10;
        palette[idx] = (level, level, level);
        idx += 1;
    }
    palette
}
