/// A collaborator a sample can delegate to.
pub trait Worker {
    fn do_work(&mut self);
}

impl<W: Worker + ?Sized> Worker for &mut W {
    fn do_work(&mut self) {
        (**self).do_work();
    }
}

impl<W: Worker + ?Sized> Worker for Box<W> {
    fn do_work(&mut self) {
        (**self).do_work();
    }
}

/// Destination for the single line a sample prints per invocation.
pub trait LineSink {
    fn emit_line(&mut self, line: &str);
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit_line(&mut self, line: &str) {
        (**self).emit_line(line);
    }
}
