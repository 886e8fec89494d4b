use crate::camera::projection::{MAX_FOVY_DEGREES, MIN_FOVY_DEGREES};
use crate::camera::{NavigationMode, RigidFrame};

pub const MAX_SPEED: f32 = 20.0;

/// Read-only values shown by the overlay
#[derive(Debug, Clone, Copy)]
pub struct PanelInfo {
    pub fps: f32,
    pub frame: RigidFrame,
    pub dragging: bool,
}

/// Overlay panel with the tunable parameters
///
/// The application copies its current values in before drawing and reads the
/// edited values back afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub visible: bool,
    pub mode: NavigationMode,
    pub speed: f32,
    pub fovy_degrees: f32,
    reset_requested: bool,
}

impl Panel {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            mode: NavigationMode::default(),
            speed: 1.0,
            fovy_degrees: MAX_FOVY_DEGREES,
            reset_requested: false,
        }
    }

    /// True once after the "Reset camera" button was clicked
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_requested)
    }

    pub fn show(&mut self, ctx: &egui::Context, info: &PanelInfo) {
        if !self.visible {
            return;
        }

        egui::Window::new("Camera")
            .title_bar(true)
            .resizable(false)
            .default_pos(egui::pos2(10.0, 10.0))
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading(
                    egui::RichText::new(format!("{:.0} FPS", info.fps))
                        .size(24.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );

                ui.add_space(5.0);
                ui.separator();

                ui.label(
                    egui::RichText::new("Navigation")
                        .size(16.0)
                        .color(egui::Color32::from_rgb(100, 200, 100)),
                );
                ui.horizontal(|ui| {
                    for mode in NavigationMode::ALL {
                        ui.radio_value(&mut self.mode, mode, mode.label());
                    }
                });
                ui.add(
                    egui::Slider::new(&mut self.speed, 0.0..=MAX_SPEED)
                        .clamping(egui::SliderClamping::Edits)
                        .text("speed"),
                );
                ui.add(
                    egui::Slider::new(&mut self.fovy_degrees, MIN_FOVY_DEGREES..=MAX_FOVY_DEGREES)
                        .text("fov (deg)"),
                );
                if ui.button("Reset camera").clicked() {
                    self.reset_requested = true;
                }

                ui.add_space(5.0);
                ui.separator();

                let eye = info.frame.eye();
                let center = info.frame.center();
                let up = info.frame.up();
                ui.monospace(format!("eye    ({:.2}, {:.2}, {:.2})", eye.x, eye.y, eye.z));
                ui.monospace(format!("center ({:.2}, {:.2}, {:.2})", center.x, center.y, center.z));
                ui.monospace(format!("up     ({:.2}, {:.2}, {:.2})", up.x, up.y, up.z));
                if info.dragging {
                    ui.label(egui::RichText::new("dragging").color(egui::Color32::GRAY));
                }

                ui.add_space(5.0);
                ui.label(egui::RichText::new(help_text(self.mode)).size(11.0).color(egui::Color32::GRAY));
            });
    }
}

fn help_text(mode: NavigationMode) -> &'static str {
    match mode {
        NavigationMode::Trackball => {
            "Middle drag: orbit\nShift + middle drag: pan\nCtrl + middle drag: zoom\nWheel: field of view"
        }
        NavigationMode::FirstPerson => {
            "WASD: move   Up/Down: height\nQ/E: roll   Middle drag: look\nWheel: field of view"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> PanelInfo {
        PanelInfo {
            fps: 60.0,
            frame: RigidFrame::default(),
            dragging: false,
        }
    }

    #[test]
    fn drawing_without_input_keeps_values() {
        let ctx = egui::Context::default();
        let mut panel = Panel::new(true);
        panel.speed = 3.0;
        let before = panel.clone();

        let _ = ctx.run(egui::RawInput::default(), |ctx| panel.show(ctx, &info()));

        assert_eq!(panel, before);
        assert!(!panel.take_reset());
    }

    #[test]
    fn speed_above_slider_range_survives_a_frame() {
        let ctx = egui::Context::default();
        let mut panel = Panel::new(true);
        panel.speed = MAX_SPEED + 10.0;

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| panel.show(ctx, &info()));
        }

        assert_eq!(panel.speed, MAX_SPEED + 10.0);
    }

    #[test]
    fn hidden_panel_draws_nothing() {
        let ctx = egui::Context::default();
        let mut panel = Panel::new(false);

        let output = ctx.run(egui::RawInput::default(), |ctx| panel.show(ctx, &info()));
        assert!(output.shapes.is_empty());
    }

    #[test]
    fn reset_is_taken_once() {
        let mut panel = Panel::new(true);
        panel.reset_requested = true;
        assert!(panel.take_reset());
        assert!(!panel.take_reset());
    }
}
