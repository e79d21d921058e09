use crate::controller::Screen;

/// Host surface a [`ViewController`](crate::ViewController) renders into.
///
/// `render` is called after every change with the complete screen; a
/// container keeps no state it could not rebuild from the latest `Screen`.
pub trait Container {
    fn render(&mut self, screen: &Screen);
}

impl<C: Container + ?Sized> Container for Box<C> {
    fn render(&mut self, screen: &Screen) {
        (**self).render(screen);
    }
}
