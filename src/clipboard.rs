use std::fmt;

use crate::error::Result;

/// Something a password can be copied into.
pub trait Clipboard {
    fn set_contents(&mut self, contents: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()> {
        self.set_contents("")
    }
}

/// The clipboard of the desktop session.
///
/// The connection is opened on first use and then kept, on X11 the contents disappear
/// when the owning handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> SystemClipboard {
        SystemClipboard::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        match self.inner.as_mut() {
            Some(clipboard) => Ok(clipboard),
            None => Err(crate::Error::Generic("clipboard unavailable")),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn set_contents(&mut self, contents: &str) -> Result<()> {
        self.handle()?.set_text(contents.to_owned())?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.handle()?.clear()?;
        Ok(())
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}
