/// Collects render and resize requests seen during one loop iteration
///
/// Any number of render requests collapse into one frame; only the last resize
/// of an iteration is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Coalescer {
    resize: Option<(u16, u16)>,
    render: bool,
}

impl Coalescer {
    pub fn request_render(&mut self) {
        self.render = true;
    }

    /// A resize always implies a fresh frame.
    pub fn request_resize(&mut self, width: u16, height: u16) {
        self.resize = Some((width, height));
        self.render = true;
    }

    pub fn take_resize(&mut self) -> Option<(u16, u16)> {
        self.resize.take()
    }

    /// Whether to draw this iteration; clears the request.
    pub fn take_render(&mut self) -> bool {
        std::mem::take(&mut self.render)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::Coalescer;

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(5, true)]
    fn test_render_requests_collapse(#[case] requests: usize, #[case] expected: bool) {
        let mut coalescer = Coalescer::default();
        for _ in 0..requests {
            coalescer.request_render();
        }
        assert_eq!(coalescer.take_render(), expected);
        assert!(!coalescer.take_render());
    }

    #[test]
    fn test_last_resize_wins() {
        let mut coalescer = Coalescer::default();
        assert_eq!(coalescer.take_resize(), None);

        coalescer.request_resize(10, 10);
        coalescer.request_resize(20, 30);

        assert_eq!(coalescer.take_resize(), Some((20, 30)));
        assert_eq!(coalescer.take_resize(), None);
        assert!(coalescer.take_render());
    }
}
