//! G-set designation (SCS) and shift handling (spec §3 `CharsetState`,
//! spec §4.4 step 0 "active charset").
//!
//! Only `B`/`0`/`A`/`U` (USASCII alias) carry a distinct `CharsetId` in
//! this model; every other 94- or 96-character set designation is
//! accepted and falls back to ASCII, matching spec.md's narrow
//! "Recognized: B, 0, A, U" requirement.

use better_any::TidExt;

use raxol_vterm::event::charset::{
    Charset94Code, Charset96Code, DesignateG0, DesignateG1, DesignateG1_96,
    DesignateG2, DesignateG2_96, DesignateG3, DesignateG3_96, LockingShift1Right,
    LockingShift2, LockingShift2Right, LockingShift3, LockingShift3Right,
    ShiftIn, ShiftOut, SingleShift2, SingleShift3,
};

use crate::model::cursor::{CharsetId, GSet};
use crate::model::emulator::Emulator;

fn from_94(charset: Charset94Code) -> CharsetId {
    match charset {
        Charset94Code::Ascii | Charset94Code::Cp437 => CharsetId::Ascii,
        Charset94Code::British => CharsetId::Uk,
        Charset94Code::DecSpecialGraphic => CharsetId::DecSpecialGraphics,
        _ => CharsetId::Ascii,
    }
}

fn from_96(_charset: Charset96Code) -> CharsetId {
    CharsetId::Ascii
}

impl Emulator {
    /// Dispatch charset designation/shift events. A no-op for anything
    /// else (called unconditionally from `handle_event`).
    pub(crate) fn handle_charset_event(&mut self, event: &dyn vtansi::AnsiEvent) {
        macro_rules! designate {
            ($ty:ty, $set:expr, $conv:expr) => {
                if let Some(ev) = event.downcast_ref::<$ty>() {
                    let charset = $conv(ev.charset);
                    self.active_buf_mut().charset_state.designate($set, charset);
                    return;
                }
            };
        }

        designate!(DesignateG0, GSet::G0, from_94);
        designate!(DesignateG1, GSet::G1, from_94);
        designate!(DesignateG2, GSet::G2, from_94);
        designate!(DesignateG3, GSet::G3, from_94);
        designate!(DesignateG1_96, GSet::G1, from_96);
        designate!(DesignateG2_96, GSet::G2, from_96);
        designate!(DesignateG3_96, GSet::G3, from_96);

        if event.downcast_ref::<ShiftOut>().is_some() {
            self.active_buf_mut().charset_state.gl = GSet::G1;
            return;
        }
        if event.downcast_ref::<ShiftIn>().is_some() {
            self.active_buf_mut().charset_state.gl = GSet::G0;
            return;
        }
        if event.downcast_ref::<LockingShift2>().is_some() {
            self.active_buf_mut().charset_state.gl = GSet::G2;
            return;
        }
        if event.downcast_ref::<LockingShift3>().is_some() {
            self.active_buf_mut().charset_state.gl = GSet::G3;
            return;
        }
        if event.downcast_ref::<LockingShift1Right>().is_some() {
            self.active_buf_mut().charset_state.gr = GSet::G1;
            return;
        }
        if event.downcast_ref::<LockingShift2Right>().is_some() {
            self.active_buf_mut().charset_state.gr = GSet::G2;
            return;
        }
        if event.downcast_ref::<LockingShift3Right>().is_some() {
            self.active_buf_mut().charset_state.gr = GSet::G3;
            return;
        }
        if event.downcast_ref::<SingleShift2>().is_some() {
            self.active_buf_mut().charset_state.single_shift = Some(GSet::G2);
            return;
        }
        if event.downcast_ref::<SingleShift3>().is_some() {
            self.active_buf_mut().charset_state.single_shift = Some(GSet::G3);
        }
    }
}
