//! Clipboard access (OSC 52).

/// Set or query the system clipboard.
///
/// `selection` names the buffer(s) affected (`c` = clipboard, `p`/`s` =
/// primary/selection, `0`-`7` = cut buffers); `data` is either `?` (query)
/// or the base64-encoded payload to set.
///
/// See <https://invisible-island.net/xterm/ctlseqs/ctlseqs.html#h3-Operating-System-Commands>
/// for reference and <https://terminalguide.namepad.de/seq/osc-52/> for
/// terminal support specifics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, vtansi::derive::AnsiOutput)]
#[vtansi(osc, number = "52")]
pub struct ClipboardAccess<'a> {
    pub selection: &'a str,
    pub data: &'a str,
}

/// Response to a clipboard query, carrying the base64-encoded contents.
///
/// See [`ClipboardAccess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, vtansi::derive::AnsiInput)]
#[vtansi(osc, number = "52")]
pub struct ClipboardAccessResponse<'a> {
    pub selection: &'a str,
    pub data: &'a str,
}
