use std::{fmt::Display, fmt::Result, fmt::Write};

use crate::format::*;

impl Path {
    /// Write the bracketed text form of the path, as produced by its
    /// `Display` impl, into `w`
    pub fn write_text(&self, w: &mut impl std::io::Write) -> eyre::Result<()> {
        struct Writer<'a, W> {
            inner: &'a mut W,
            error: Option<std::io::Error>,
        }

        impl<'a, W> Write for Writer<'a, W>
        where
            W: std::io::Write,
        {
            fn write_str(&mut self, s: &str) -> Result {
                if self.error.is_some() {
                    return Err(std::fmt::Error);
                }

                if let Err(e) = write!(self.inner, "{}", s) {
                    self.error = Some(e);
                    return Err(std::fmt::Error);
                }

                Ok(())
            }
        }

        let mut writer = Writer {
            inner: w,
            error: None,
        };

        let result = self.to_text(&mut writer, 0);

        if let Some(e) = writer.error {
            return Err(e.into());
        }

        result?;

        Ok(())
    }
}

trait ToTextFormat {
    fn to_text(&self, w: &mut impl Write, indent: usize) -> Result;
}

struct Indent(usize);

impl Display for Indent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.0 {
            write!(f, " ")?;
        }

        Ok(())
    }
}

impl ToTextFormat for Path {
    fn to_text(&self, w: &mut impl Write, indent: usize) -> Result {
        write!(w, "[")?;

        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(w, ",\n{}", Indent(indent + 1))?;
            }
            segment.to_text(w, indent + 1)?;
        }

        write!(w, "]")?;

        Ok(())
    }
}

impl ToTextFormat for Segment {
    fn to_text(&self, w: &mut impl Write, _indent: usize) -> Result {
        write!(w, "[")?;

        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(w, ", ")?;
            }
            write!(w, "{:.0}", value)?;
        }

        write!(w, "]")?;

        Ok(())
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result {
        self.to_text(f, 0)
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result {
        self.to_text(f, 0)
    }
}
