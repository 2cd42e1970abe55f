use eframe::egui;
use eframe::App;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::config::Settings;
use crate::converter::{first_dropped, Converter};
use crate::error::{ConvertError, Result};
use crate::interaction::{Interaction, NativeDialogs};

struct PendingCopy {
    destination: PathBuf,
    result: oneshot::Receiver<Result<PathBuf>>,
}

pub struct ZipToUdfApp<I = NativeDialogs> {
    converter: Converter<I>,
    runtime: Runtime,
    pending: Option<PendingCopy>,
}

impl ZipToUdfApp<NativeDialogs> {
    pub fn new() -> std::io::Result<Self> {
        Self::with_interaction(NativeDialogs)
    }
}

impl<I: Interaction> ZipToUdfApp<I> {
    pub fn with_interaction(interaction: I) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("zip-to-udf")
            .build()?;
        Ok(Self {
            converter: Converter::new(interaction),
            runtime,
            pending: None,
        })
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    fn select(&mut self) {
        if let Some(path) = self.converter.interaction_mut().pick_source() {
            self.start(&path);
        }
    }

    fn drop_paths(&mut self, paths: Vec<PathBuf>) {
        if self.is_busy() {
            warn!("a copy is already running, ignoring {} dropped file(s)", paths.len());
            return;
        }
        if let Some(path) = first_dropped(paths) {
            self.start(&path);
        }
    }

    /// Validates and prompts on the UI thread, then hands the copy to the
    /// blocking pool.
    fn start(&mut self, path: &Path) {
        let Some(job) = self.converter.begin(path) else {
            return;
        };
        let (tx, rx) = oneshot::channel();
        let destination = job.destination.clone();
        self.runtime.spawn_blocking(move || {
            let _ = tx.send(job.run());
        });
        self.pending = Some(PendingCopy {
            destination,
            result: rx,
        });
    }

    fn poll(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        let result = match pending.result.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Closed) => Err(ConvertError::Interrupted(format!(
                "no result for {}",
                pending.destination.display()
            ))),
        };
        self.pending = None;
        self.converter.report(result);
        false
    }

    fn drop_zone(&self, ui: &mut egui::Ui, hovering: bool) {
        let stroke = if hovering {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(100, 200, 255))
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(60))
        };
        egui::Frame::none()
            .fill(egui::Color32::from_rgb(0xf2, 0xf2, 0xf2))
            .stroke(stroke)
            .rounding(4.0)
            .inner_margin(egui::Margin::symmetric(12.0, 24.0))
            .show(ui, |ui| {
                ui.set_width(260.0);
                ui.vertical_centered(|ui| {
                    let text = match &self.pending {
                        Some(p) => format!("Saving {}", p.destination.display()),
                        None => "Drop the ZIP file here".to_string(),
                    };
                    ui.colored_label(egui::Color32::from_gray(0x33), text);
                });
            });
    }
}

impl<I: Interaction> App for ZipToUdfApp<I> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let busy = self.poll();

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            info!("received drop of {} file(s)", dropped.len());
            self.drop_paths(dropped);
        }
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("Load ZIP, get UDF");
                ui.add_space(8.0);
                ui.label("Pick or drop a ZIP; you will choose where the .udf goes.");
                ui.add_space(8.0);
                self.drop_zone(ui, hovering);
                ui.add_space(12.0);

                let button = egui::Button::new("Select ZIP").min_size(egui::vec2(110.0, 0.0));
                if ui.add_enabled(!self.is_busy(), button).clicked() {
                    self.select();
                }
                if self.is_busy() {
                    ui.spinner();
                }
            });
        });

        if busy || self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

/// Viewport for the main window, with the bundled icon when there is one.
pub fn viewport(settings: &Settings) -> egui::ViewportBuilder {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(settings.title.clone())
        .with_inner_size(settings.window_size)
        .with_resizable(settings.resizable);
    if let Some(icon) = crate::resources::window_icon(&settings.icon) {
        viewport = viewport.with_icon(icon);
    }
    viewport
}
