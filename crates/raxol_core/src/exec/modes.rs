//! `SM`/`RM` mode set/reset dispatch (spec §6 "Recognized Modes") plus
//! the side effects a handful of them carry (alternate screen switch,
//! DECCOLM resize+clear).

use better_any::TidExt;

use raxol_vterm::event::cursor::{
    DisableCursorBlinking, DisableCursorVisibility,
    DisableRelativeCursorOriginMode, EnableCursorBlinking,
    EnableCursorVisibility, EnableRelativeCursorOriginMode,
};
use raxol_vterm::event::keyboard::{DisableCursorKeysMode, EnableCursorKeysMode};
use raxol_vterm::event::mouse::{
    DisableMouseAnyEventTrackingMode, DisableMouseClickAndDragTrackingMode,
    DisableMouseDownUpTrackingMode, DisableMouseReportRxvtMode,
    DisableMouseReportSgrMode, EnableMouseAnyEventTrackingMode,
    EnableMouseClickAndDragTrackingMode, EnableMouseDownUpTrackingMode,
    EnableMouseReportRxvtMode, EnableMouseReportSgrMode,
};
use raxol_vterm::event::terminal::{
    DisableAlternateScreenBasicMode, DisableAlternateScreenClearOnExitMode,
    DisableAlternateScreenMode, DisableBracketedPasteMode,
    DisableHundredThirtyTwoColumnMode, DisableInsertMode,
    DisableLineWraparoundMode, DisableLinefeedMode,
    DisableReverseDisplayColorsMode, EnableAlternateScreenBasicMode,
    EnableAlternateScreenClearOnExitMode, EnableAlternateScreenMode,
    EnableBracketedPasteMode, EnableHundredThirtyTwoColumnMode,
    EnableInsertMode, EnableLineWraparoundMode, EnableLinefeedMode,
    EnableReverseDisplayColorsMode,
};

use crate::model::color::StyleAttr;
use crate::model::emulator::Emulator;

impl Emulator {
    /// Dispatch a mode enable/disable event. A no-op for anything else
    /// (called unconditionally from `handle_event`).
    pub(crate) fn handle_mode_event(&mut self, event: &dyn vtansi::AnsiEvent) {
        macro_rules! simple {
            ($on_ty:ty, $off_ty:ty, $set:expr) => {
                if event.downcast_ref::<$on_ty>().is_some() {
                    $set(self, true);
                    return;
                }
                if event.downcast_ref::<$off_ty>().is_some() {
                    $set(self, false);
                    return;
                }
            };
        }

        simple!(EnableInsertMode, DisableInsertMode, |s: &mut Self, v| {
            s.active_buf_mut().modes.irm = v;
        });
        simple!(EnableLinefeedMode, DisableLinefeedMode, |s: &mut Self, v| {
            s.active_buf_mut().modes.lnm = v;
        });
        simple!(EnableCursorKeysMode, DisableCursorKeysMode, |s: &mut Self, v| {
            s.active_buf_mut().modes.decckm = v;
        });
        simple!(
            EnableRelativeCursorOriginMode,
            DisableRelativeCursorOriginMode,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.decom = v;
            }
        );
        simple!(
            EnableLineWraparoundMode,
            DisableLineWraparoundMode,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.decawm = v;
            }
        );
        simple!(
            EnableCursorVisibility,
            DisableCursorVisibility,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.dectcem = v;
                s.active_buf_mut().cursor.visible = v;
            }
        );
        simple!(
            EnableMouseDownUpTrackingMode,
            DisableMouseDownUpTrackingMode,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.mouse_1000 = v;
            }
        );
        simple!(
            EnableMouseClickAndDragTrackingMode,
            DisableMouseClickAndDragTrackingMode,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.mouse_1002 = v;
            }
        );
        simple!(
            EnableMouseAnyEventTrackingMode,
            DisableMouseAnyEventTrackingMode,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.mouse_1003 = v;
            }
        );
        simple!(
            EnableMouseReportSgrMode,
            DisableMouseReportSgrMode,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.mouse_1006 = v;
            }
        );
        simple!(
            EnableMouseReportRxvtMode,
            DisableMouseReportRxvtMode,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.mouse_1015 = v;
            }
        );
        simple!(
            EnableBracketedPasteMode,
            DisableBracketedPasteMode,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.bracketed_paste = v;
            }
        );
        simple!(EnableCursorBlinking, DisableCursorBlinking, |s: &mut Self, v| {
            s.active_buf_mut().modes.cursor_blink = v;
        });
        simple!(
            EnableReverseDisplayColorsMode,
            DisableReverseDisplayColorsMode,
            |s: &mut Self, v| {
                s.active_buf_mut().modes.decscnm = v;
            }
        );

        if event.downcast_ref::<EnableHundredThirtyTwoColumnMode>().is_some() {
            self.set_decolm(true);
            return;
        }
        if event.downcast_ref::<DisableHundredThirtyTwoColumnMode>().is_some() {
            self.set_decolm(false);
            return;
        }

        if event.downcast_ref::<EnableAlternateScreenBasicMode>().is_some() {
            self.active_buf_mut().modes.alt_47 = true;
            self.enter_alternate(false, false);
            return;
        }
        if event.downcast_ref::<DisableAlternateScreenBasicMode>().is_some() {
            self.active_buf_mut().modes.alt_47 = false;
            self.exit_alternate(false);
            return;
        }
        if event
            .downcast_ref::<EnableAlternateScreenClearOnExitMode>()
            .is_some()
        {
            self.active_buf_mut().modes.alt_1047 = true;
            self.enter_alternate(false, false);
            return;
        }
        if event
            .downcast_ref::<DisableAlternateScreenClearOnExitMode>()
            .is_some()
        {
            self.active_buf_mut().modes.alt_1047 = false;
            let style = StyleAttr::reset();
            let rows = self.alternate.rows();
            for r in 0..rows {
                self.alternate.clear_row(r, style);
            }
            self.exit_alternate(false);
            return;
        }
        if event.downcast_ref::<EnableAlternateScreenMode>().is_some() {
            self.active_buf_mut().modes.alt_1049 = true;
            self.enter_alternate(true, true);
            return;
        }
        if event.downcast_ref::<DisableAlternateScreenMode>().is_some() {
            self.active_buf_mut().modes.alt_1049 = false;
            self.exit_alternate(true);
        }
    }

    /// DECCOLM: switch between 80 and 132 columns, clearing the screen.
    fn set_decolm(&mut self, wide: bool) {
        self.active_buf_mut().modes.decolm = wide;
        self.resize(self.rows, if wide { 132 } else { 80 });
        let style = StyleAttr::reset();
        let rows = self.rows;
        let buf = self.active_buf_mut();
        for r in 0..rows {
            buf.clear_row(r, style);
        }
        buf.cursor.row = 0;
        buf.cursor.col = 0;
    }
}
