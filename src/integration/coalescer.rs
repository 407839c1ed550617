/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Whether to draw this loop: any render request, a terminal render tick or a resize
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool, resized: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render || resized
    }

    /// Multiple resizes in one loop collapse into the last one
    #[inline]
    pub fn decide_resize(events: &[(u16, u16)]) -> Option<(u16, u16)> {
        events.last().copied()
    }
}
