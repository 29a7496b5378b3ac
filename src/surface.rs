/// The page mutations the controller and bootstrap hooks perform.
///
/// Panel and slider indices are positions in the lists the controller was built with.
pub trait Surface {
    fn set_modal_visible(&mut self, visible: bool);

    /// `None` leaves that dimension as it is. Values are used verbatim.
    fn set_canvas_size(&mut self, width: Option<&str>, height: Option<&str>);

    fn set_panel_visible(&mut self, panel: usize, visible: bool);

    fn set_slider_value(&mut self, slider: usize, value: i32);

    /// The value string the slider currently holds.
    fn slider_value(&self, slider: usize) -> String;

    fn set_label_text(&mut self, slider: usize, text: &str);

    fn hide_loading(&mut self);
}
