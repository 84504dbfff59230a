//! SGR (`CSI ... m`) dispatch. Not a registered `vtansi` event type — the
//! executor intercepts it as an `UnrecognizedOutputEvent` and parses
//! `csi.params` directly, the way `vtansi::parse`'s numeric impls do
//! internally (`atoi_simd::parse`).

use vt_push_parser::event::CSI;

use crate::model::color::{Color, Underline};
use crate::model::emulator::Emulator;

/// One semicolon-delimited group, further split on `:` for colon-form
/// subparams (e.g. `4:3`, `38:2:r:g:b`).
fn groups(csi: &CSI) -> impl Iterator<Item = Vec<u16>> + '_ {
    (&csi.params).into_iter().map(|group| {
        group
            .split(|&b| b == b':')
            .map(|part| atoi_simd::parse::<u16>(part).unwrap_or(0))
            .collect()
    })
}

impl Emulator {
    pub(crate) fn apply_sgr(&mut self, csi: &CSI) {
        let all: Vec<Vec<u16>> = groups(csi).collect();
        if all.is_empty() {
            self.active_buf_mut().cursor.current_style =
                crate::model::color::StyleAttr::reset();
            return;
        }

        let mut i = 0;
        while i < all.len() {
            let group = &all[i];
            let code = group.first().copied().unwrap_or(0);
            match code {
                0 => {
                    self.active_buf_mut().cursor.current_style =
                        crate::model::color::StyleAttr::reset();
                }
                1 => self.style_mut().bold = true,
                2 => self.style_mut().faint = true,
                3 => self.style_mut().italic = true,
                4 => {
                    self.style_mut().underline = match group.get(1) {
                        Some(2) => Underline::Double,
                        Some(3) => Underline::Curly,
                        Some(0) => Underline::None,
                        _ => Underline::Single,
                    };
                }
                5 => self.style_mut().blink = true,
                7 => self.style_mut().reverse = true,
                8 => self.style_mut().conceal = true,
                9 => self.style_mut().strikethrough = true,
                21 => self.style_mut().underline = Underline::Double,
                22 => {
                    self.style_mut().bold = false;
                    self.style_mut().faint = false;
                }
                23 => self.style_mut().italic = false,
                24 => self.style_mut().underline = Underline::None,
                25 => self.style_mut().blink = false,
                27 => self.style_mut().reverse = false,
                28 => self.style_mut().conceal = false,
                29 => self.style_mut().strikethrough = false,
                30..=37 => {
                    self.style_mut().fg = Color::Indexed((code - 30) as u8);
                }
                38 => {
                    if let Some((color, consumed)) = extended_color(&all[i..]) {
                        self.style_mut().fg = color;
                        i += consumed - 1;
                    }
                }
                39 => self.style_mut().fg = Color::Default,
                40..=47 => {
                    self.style_mut().bg = Color::Indexed((code - 40) as u8);
                }
                48 => {
                    if let Some((color, consumed)) = extended_color(&all[i..]) {
                        self.style_mut().bg = color;
                        i += consumed - 1;
                    }
                }
                49 => self.style_mut().bg = Color::Default,
                53 => self.style_mut().overline = true,
                55 => self.style_mut().overline = false,
                90..=97 => {
                    self.style_mut().fg = Color::Indexed(8 + (code - 90) as u8);
                }
                100..=107 => {
                    self.style_mut().bg = Color::Indexed(8 + (code - 100) as u8);
                }
                _ => {}
            }
            i += 1;
        }
    }

    fn style_mut(&mut self) -> &mut crate::model::color::StyleAttr {
        &mut self.active_buf_mut().cursor.current_style
    }
}

/// Parse `38;5;N`, `38;2;r;g;b`, or their colon-form equivalents starting
/// at `groups[0]`. Returns the color and how many groups it consumed.
fn extended_color(groups: &[Vec<u16>]) -> Option<(Color, usize)> {
    let first = groups.first()?;
    if first.len() >= 3 {
        // Colon form: `38:5:N`, `38:2:r:g:b`, or the 6-element
        // `38:2:colorspace-id:r:g:b` (the colorspace-id slot is commonly
        // left empty, which parses to 0) — skip it when present.
        return match first.get(1) {
            Some(5) => Some((Color::Indexed(*first.get(2)? as u8), 1)),
            Some(2) if first.len() >= 6 => Some((
                Color::TrueColor(
                    *first.get(3)? as u8,
                    *first.get(4)? as u8,
                    *first.get(5)? as u8,
                ),
                1,
            )),
            Some(2) if first.len() >= 5 => Some((
                Color::TrueColor(
                    *first.get(2)? as u8,
                    *first.get(3)? as u8,
                    *first.get(4)? as u8,
                ),
                1,
            )),
            _ => None,
        };
    }
    // Semicolon form: separate groups for mode, then components.
    match groups.get(1)?.first().copied() {
        Some(5) => {
            let n = *groups.get(2)?.first()?;
            Some((Color::Indexed(n as u8), 3))
        }
        Some(2) => {
            let r = *groups.get(2)?.first()?;
            let g = *groups.get(3)?.first()?;
            let b = *groups.get(4)?.first()?;
            Some((Color::TrueColor(r as u8, g as u8, b as u8), 5))
        }
        _ => None,
    }
}
