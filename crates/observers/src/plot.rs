//! Native plot window for a [`Scene`].
//!
//! ```ignore
//! let scene = Scene::new(&problem, solution.x, Some(solution.history.as_slice()));
//! plot::show(scene, "Primal-dual")?;
//! ```

use eframe::egui::{self, Color32};
use egui_plot::{
    HLine, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text, VLine,
};

use crate::Scene;

const OBJECTIVE: Color32 = Color32::from_rgb(31, 119, 180);
const SURFACE: Color32 = Color32::from_rgb(255, 127, 14);
const PATH: Color32 = Color32::from_rgb(44, 160, 44);

/// Opens a blocking egui window displaying the scene.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(scene: Scene, title: &str) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SceneApp {
                scene,
                framed: false,
            }))
        }),
    )
}

/// The egui [`eframe::App`] that renders a scene.
struct SceneApp {
    scene: Scene,

    /// Whether the initial view has been applied.
    framed: bool,
}

impl eframe::App for SceneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let scene = &self.scene;
        let critical = scene.critical;
        let framed = &mut self.framed;

        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("scene")
                .legend(Legend::default())
                .x_axis_label("x")
                .y_axis_label("y")
                .auto_bounds(false.into())
                .show(ui, |plot_ui| {
                    // Set once so the user can still pan and zoom.
                    if !*framed {
                        let (min, max) = scene.view();
                        plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
                        *framed = true;
                    }

                    let axis = LineStyle::dashed_dense();
                    plot_ui.hline(HLine::new(0.0).color(Color32::BLACK).style(axis));
                    plot_ui.vline(VLine::new(0.0).color(Color32::BLACK).style(axis));

                    plot_ui.line(
                        Line::new(PlotPoints::from(scene.objective.clone()))
                            .name("f(x)")
                            .color(OBJECTIVE),
                    );
                    plot_ui.line(
                        Line::new(PlotPoints::from(scene.surface.clone()))
                            .name("g(x)")
                            .color(SURFACE),
                    );
                    plot_ui.hline(
                        HLine::new(scene.target)
                            .name("constraint")
                            .color(OBJECTIVE.gamma_multiply(0.25)),
                    );

                    if let Some(path) = &scene.path {
                        plot_ui.line(
                            Line::new(PlotPoints::from(path.clone()))
                                .name("path of x")
                                .color(PATH.gamma_multiply(0.9)),
                        );
                    }

                    plot_ui.points(
                        Points::new(vec![[critical.x, critical.objective]])
                            .radius(5.0)
                            .color(Color32::RED),
                    );
                    plot_ui.points(
                        Points::new(vec![[critical.x, critical.surface]])
                            .radius(5.0)
                            .color(Color32::GREEN),
                    );
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(critical.x, critical.objective),
                            critical.label(),
                        )
                        .anchor(egui::Align2::CENTER_BOTTOM),
                    );
                });
        });
    }
}
