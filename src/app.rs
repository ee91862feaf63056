//! Main application state and UI

use eframe::egui;
use serde::Serialize;

use crate::analysis::{
    clean_sequence, highlight_positions, highlight_spans, project_with, scan_complement,
    scan_pattern, summarize, ComplementReport, GrowthParams, GrowthSummary, PatternReport,
};

/// Application state
pub struct WorkbenchApp {
    // Complementarity tab state
    strand_a_input: String,
    strand_b_input: String,
    complement_report: Option<ComplementReport>,
    complement_error: Option<String>,

    // Restriction site tab state
    sequence_input: String,
    site_input: String,
    pattern_report: Option<PatternReport>,
    pattern_error: Option<String>,

    // Growth model tab state
    growth_params: GrowthParams,
    growth_history: Option<Vec<f64>>,
    show_growth_table: bool,

    // View state
    current_tab: Tab,

    // Save/Load
    save_error: Option<String>,
    load_error: Option<String>,

    // Deferred actions
    pending_save: Option<SaveKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Complementarity,
    RestrictionSites,
    GrowthModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveKind {
    Complement,
    Sites,
    Growth,
}

/// Everything a growth projection produced, bundled for JSON export
#[derive(Serialize)]
struct GrowthRun<'a> {
    params: &'a GrowthParams,
    summary: GrowthSummary,
    population: &'a [f64],
}

impl Default for WorkbenchApp {
    fn default() -> Self {
        Self {
            strand_a_input: String::new(),
            strand_b_input: String::new(),
            complement_report: None,
            complement_error: None,
            sequence_input: String::new(),
            site_input: String::new(),
            pattern_report: None,
            pattern_error: None,
            growth_params: GrowthParams::default(),
            growth_history: None,
            show_growth_table: false,
            current_tab: Tab::Complementarity,
            save_error: None,
            load_error: None,
            pending_save: None,
        }
    }
}

impl WorkbenchApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn run_complement_check(&mut self) {
        self.complement_error = None;
        self.complement_report = None;

        let strand_a = clean_sequence(&self.strand_a_input);
        let strand_b = clean_sequence(&self.strand_b_input);

        match scan_complement(&strand_a, &strand_b) {
            Ok(report) => {
                self.complement_report = Some(report);
            }
            Err(e) => {
                self.complement_error = Some(e.to_string());
            }
        }
    }

    fn run_site_search(&mut self) {
        self.pattern_error = None;
        self.pattern_report = None;

        let sequence = clean_sequence(&self.sequence_input);
        let pattern = clean_sequence(&self.site_input);

        if sequence.is_empty() {
            self.pattern_error = Some("DNA sequence cannot be empty".to_string());
            return;
        }

        match scan_pattern(&sequence, &pattern) {
            Ok(positions) => {
                self.pattern_report = Some(PatternReport {
                    sequence,
                    pattern,
                    positions,
                });
            }
            Err(e) => {
                self.pattern_error = Some(e.to_string());
            }
        }
    }

    fn run_growth_projection(&mut self) {
        self.growth_history = Some(project_with(&self.growth_params));
    }

    fn save_report(&mut self, kind: SaveKind) {
        let json = match kind {
            SaveKind::Complement => match &self.complement_report {
                Some(report) => serde_json::to_string_pretty(report),
                None => {
                    self.save_error = Some("No complementarity report to save".to_string());
                    return;
                }
            },
            SaveKind::Sites => match &self.pattern_report {
                Some(report) => serde_json::to_string_pretty(report),
                None => {
                    self.save_error = Some("No site report to save".to_string());
                    return;
                }
            },
            SaveKind::Growth => match &self.growth_history {
                Some(history) => {
                    let run = GrowthRun {
                        params: &self.growth_params,
                        summary: summarize(history, self.growth_params.k),
                        population: history,
                    };
                    serde_json::to_string_pretty(&run)
                }
                None => {
                    self.save_error = Some("No growth projection to save".to_string());
                    return;
                }
            },
        };

        let file_name = match kind {
            SaveKind::Complement => "complementarity_report.json",
            SaveKind::Sites => "restriction_sites.json",
            SaveKind::Growth => "growth_projection.json",
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(file_name)
            .save_file()
        {
            match json {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        self.save_error = Some(format!("Failed to write file: {}", e));
                    } else {
                        self.save_error = None;
                    }
                }
                Err(e) => {
                    self.save_error = Some(format!("Failed to serialize: {}", e));
                }
            }
        }
    }

    fn load_sequence_file(&mut self, target: Tab) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Sequence text", &["txt", "seq", "fasta", "fa"])
            .pick_file()
        {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    // Skip FASTA-style header lines, keep the residues
                    let text: String = content
                        .lines()
                        .filter(|line| !line.trim_start().starts_with('>'))
                        .collect::<Vec<_>>()
                        .join("\n");
                    match target {
                        Tab::Complementarity => self.strand_a_input = text,
                        Tab::RestrictionSites => self.sequence_input = text,
                        Tab::GrowthModel => {}
                    }
                    self.load_error = None;
                }
                Err(e) => {
                    self.load_error = Some(format!("Failed to read file: {}", e));
                }
            }
        }
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(kind) = self.pending_save.take() {
            self.save_report(kind);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Strand A...").clicked() {
                        self.load_sequence_file(Tab::Complementarity);
                        ui.close_menu();
                    }
                    if ui.button("Load DNA Sequence...").clicked() {
                        self.load_sequence_file(Tab::RestrictionSites);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Save Complementarity Report...").clicked() {
                        self.save_report(SaveKind::Complement);
                        ui.close_menu();
                    }
                    if ui.button("Save Site Report...").clicked() {
                        self.save_report(SaveKind::Sites);
                        ui.close_menu();
                    }
                    if ui.button("Save Growth Projection...").clicked() {
                        self.save_report(SaveKind::Growth);
                        ui.close_menu();
                    }
                });
            });
        });

        // Tab bar
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.current_tab, Tab::Complementarity, "Complementarity");
                ui.selectable_value(
                    &mut self.current_tab,
                    Tab::RestrictionSites,
                    "Restriction Sites",
                );
                ui.selectable_value(&mut self.current_tab, Tab::GrowthModel, "Growth Model");
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match self.current_tab {
                    Tab::Complementarity => {
                        if let Some(ref report) = self.complement_report {
                            if report.is_perfect() {
                                ui.label(format!(
                                    "Perfect complementarity over {} base pairs",
                                    report.verdicts.len()
                                ));
                            } else {
                                ui.label(format!(
                                    "{} anomalies in {} base pairs",
                                    report.anomaly_count(),
                                    report.verdicts.len()
                                ));
                            }
                        } else {
                            ui.label("Enter two strands to check complementarity");
                        }
                    }
                    Tab::RestrictionSites => {
                        if let Some(ref report) = self.pattern_report {
                            ui.label(format!(
                                "{} sites of '{}' in {} bases",
                                report.site_count(),
                                report.pattern,
                                report.sequence.chars().count()
                            ));
                        } else {
                            ui.label("Enter a DNA sequence and a restriction site to search");
                        }
                    }
                    Tab::GrowthModel => {
                        if let Some(ref history) = self.growth_history {
                            let summary = summarize(history, self.growth_params.k);
                            ui.label(format!(
                                "Projected {} generations, final population {:.2}",
                                history.len().saturating_sub(1),
                                summary.final_population
                            ));
                        } else {
                            ui.label("Set parameters and run a projection");
                        }
                    }
                }
                if let Some(ref error) = self.save_error {
                    ui.colored_label(egui::Color32::RED, error);
                }
                if let Some(ref error) = self.load_error {
                    ui.colored_label(egui::Color32::RED, error);
                }
            });
        });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Complementarity => self.show_complementarity_tab(ui),
            Tab::RestrictionSites => self.show_sites_tab(ui),
            Tab::GrowthModel => self.show_growth_tab(ui),
        });
    }
}

impl WorkbenchApp {
    fn show_complementarity_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Strand Complementarity Checker");
        ui.separator();

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Strand 1 (5' to 3')");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear").clicked() {
                        self.strand_a_input.clear();
                    }
                    if ui.button("Load Example").clicked() {
                        self.strand_a_input = EXAMPLE_STRAND_A.to_string();
                        self.strand_b_input = EXAMPLE_STRAND_B.to_string();
                    }
                });
            });
            ui.add(
                egui::TextEdit::multiline(&mut self.strand_a_input)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(2),
            );
        });

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Strand 2 (3' to 5')");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear").clicked() {
                        self.strand_b_input.clear();
                    }
                });
            });
            ui.add(
                egui::TextEdit::multiline(&mut self.strand_b_input)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(2),
            );
        });

        ui.horizontal(|ui| {
            let can_run = !clean_sequence(&self.strand_a_input).is_empty()
                && !clean_sequence(&self.strand_b_input).is_empty();
            if ui
                .add_enabled(can_run, egui::Button::new("Check Complementarity"))
                .clicked()
            {
                self.run_complement_check();
            }
            ui.label(format!(
                "Strand 1: {} bp | Strand 2: {} bp",
                clean_sequence(&self.strand_a_input).chars().count(),
                clean_sequence(&self.strand_b_input).chars().count()
            ));
        });

        if let Some(ref error) = self.complement_error {
            ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
        }

        let Some(report) = self.complement_report.clone() else {
            return;
        };

        ui.separator();

        if report.is_perfect() {
            ui.colored_label(
                egui::Color32::from_rgb(100, 200, 100),
                "Perfect complementarity! All base pairs match correctly.",
            );
        } else {
            let display_positions: Vec<usize> =
                report.anomalies.iter().map(|&p| p + 1).collect();
            ui.colored_label(
                egui::Color32::from_rgb(255, 180, 100),
                format!(
                    "Anomalies detected: {} at positions {:?}",
                    report.anomaly_count(),
                    display_positions
                ),
            );

            ui.add_space(5.0);
            ui.label("Strands with anomalies highlighted:");
            ui.add(
                egui::Label::new(
                    egui::RichText::new(highlight_positions(&report.strand_a, &report.anomalies))
                        .monospace()
                        .size(12.0),
                )
                .wrap_mode(egui::TextWrapMode::Extend),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(highlight_positions(&report.strand_b, &report.anomalies))
                        .monospace()
                        .size(12.0),
                )
                .wrap_mode(egui::TextWrapMode::Extend),
            );
        }

        ui.add_space(5.0);
        if ui.button("Save Report").clicked() {
            self.pending_save = Some(SaveKind::Complement);
        }

        ui.add_space(5.0);
        egui::ScrollArea::vertical()
            .id_salt("verdicts_scroll")
            .show(ui, |ui| {
                egui::Grid::new("verdicts_grid")
                    .striped(true)
                    .min_col_width(60.0)
                    .show(ui, |ui| {
                        ui.strong("Position");
                        ui.strong("Strand 1");
                        ui.strong("Strand 2");
                        ui.strong("Expected");
                        ui.strong("Status");
                        ui.end_row();

                        for verdict in &report.verdicts {
                            ui.label(format!("{}", verdict.position + 1));
                            ui.label(
                                egui::RichText::new(verdict.base_a.to_string()).monospace(),
                            );
                            ui.label(
                                egui::RichText::new(verdict.base_b.to_string()).monospace(),
                            );
                            ui.label(
                                egui::RichText::new(
                                    verdict
                                        .expected
                                        .map(|c| c.to_string())
                                        .unwrap_or_else(|| "?".to_string()),
                                )
                                .monospace(),
                            );
                            if verdict.is_match {
                                ui.colored_label(egui::Color32::from_rgb(100, 200, 100), "match");
                            } else {
                                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), "anomaly");
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    fn show_sites_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Restriction Site Finder");
        ui.separator();

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading("DNA Sequence");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear").clicked() {
                        self.sequence_input.clear();
                    }
                    if ui.button("Load Example").clicked() {
                        self.sequence_input = EXAMPLE_SEQUENCE.to_string();
                        self.site_input = EXAMPLE_SITE.to_string();
                    }
                });
            });
            ui.add(
                egui::TextEdit::multiline(&mut self.sequence_input)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(4),
            );
        });

        ui.group(|ui| {
            ui.heading("Restriction Site");
            ui.label("Short motif to search for (A, C, G, T only):");
            ui.add(
                egui::TextEdit::singleline(&mut self.site_input)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(300.0),
            );
        });

        ui.horizontal(|ui| {
            let can_run = !clean_sequence(&self.sequence_input).is_empty()
                && !clean_sequence(&self.site_input).is_empty();
            if ui
                .add_enabled(can_run, egui::Button::new("Find Sites"))
                .clicked()
            {
                self.run_site_search();
            }
        });

        if let Some(ref error) = self.pattern_error {
            ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
        }

        let Some(report) = self.pattern_report.clone() else {
            return;
        };

        ui.separator();

        ui.label(format!(
            "Sequence length: {} bases | Site length: {} bases",
            report.sequence.chars().count(),
            report.pattern.chars().count()
        ));

        if report.positions.is_empty() {
            ui.colored_label(
                egui::Color32::from_rgb(255, 180, 100),
                format!(
                    "No restriction sites '{}' found in the DNA sequence.",
                    report.pattern
                ),
            );
            return;
        }

        let display_positions: Vec<usize> = report.positions.iter().map(|&p| p + 1).collect();
        ui.colored_label(
            egui::Color32::from_rgb(100, 200, 100),
            format!(
                "{} sites found at positions {:?}",
                report.site_count(),
                display_positions
            ),
        );

        ui.add_space(5.0);
        ui.label(format!("Sequence with '{}' sites highlighted:", report.pattern));
        egui::ScrollArea::horizontal()
            .id_salt("highlight_scroll")
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(highlight_spans(&report.sequence, &report.spans()))
                            .monospace()
                            .size(12.0),
                    )
                    .wrap_mode(egui::TextWrapMode::Extend),
                );
            });

        ui.add_space(5.0);
        if ui.button("Save Report").clicked() {
            self.pending_save = Some(SaveKind::Sites);
        }
    }

    fn show_growth_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Logistic Population Growth");
        ui.separator();

        ui.group(|ui| {
            ui.heading("Parameters");

            ui.horizontal(|ui| {
                ui.label("Initial population:");
                ui.add(
                    egui::DragValue::new(&mut self.growth_params.p0)
                        .range(1.0..=1_000_000_000.0),
                );
                ui.add_space(20.0);
                ui.label("Carrying capacity:");
                ui.add(
                    egui::DragValue::new(&mut self.growth_params.k)
                        .range(1.0..=1_000_000_000.0),
                );
            });

            ui.horizontal(|ui| {
                ui.label("Growth rate:");
                ui.add(
                    egui::DragValue::new(&mut self.growth_params.r)
                        .range(0.01..=4.0)
                        .speed(0.01),
                );
                ui.add_space(20.0);
                ui.label("Generations:");
                ui.add(egui::DragValue::new(&mut self.growth_params.steps).range(1..=10_000));
            });

            if self.growth_params.r > 1.0 {
                ui.colored_label(
                    egui::Color32::YELLOW,
                    "Warning: growth rate > 1 may lead to unstable behavior",
                );
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Run Projection").clicked() {
                self.run_growth_projection();
            }
            ui.checkbox(&mut self.show_growth_table, "Show data table");
        });

        let Some(history) = self.growth_history.clone() else {
            return;
        };

        ui.separator();

        let summary = summarize(&history, self.growth_params.k);
        ui.label(format!(
            "Final population: {:.2} | Maximum reached: {:.2} | {:.2}% of carrying capacity",
            summary.final_population, summary.peak_population, summary.percent_of_capacity
        ));

        ui.add_space(5.0);
        self.show_growth_plot(ui, &history);

        ui.add_space(5.0);
        if ui.button("Save Projection").clicked() {
            self.pending_save = Some(SaveKind::Growth);
        }

        if self.show_growth_table {
            ui.add_space(5.0);
            egui::ScrollArea::vertical()
                .id_salt("growth_table_scroll")
                .max_height(220.0)
                .show(ui, |ui| {
                    egui::Grid::new("growth_grid")
                        .striped(true)
                        .min_col_width(80.0)
                        .show(ui, |ui| {
                            ui.strong("Time");
                            ui.strong("Population");
                            ui.end_row();

                            // Every 5th point plus the last keeps the table short
                            let last = history.len() - 1;
                            for (t, pop) in history.iter().enumerate() {
                                if t % 5 == 0 || t == last {
                                    ui.label(format!("{}", t));
                                    ui.label(format!("{:.2}", pop));
                                    ui.end_row();
                                }
                            }
                        });
                });
        }
    }

    fn show_growth_plot(&self, ui: &mut egui::Ui, history: &[f64]) {
        let k = self.growth_params.k;
        let width = ui.available_width().max(200.0);
        let height = 240.0;

        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(25, 25, 25));

        let max_value = history
            .iter()
            .copied()
            .fold(k, f64::max)
            .max(1.0)
            * 1.05;
        let n = history.len().max(2);

        let to_screen = |t: usize, value: f64| {
            let x = rect.left() + (t as f32 / (n - 1) as f32) * rect.width();
            let y = rect.bottom() - ((value / max_value) as f32) * rect.height();
            egui::pos2(x, y.clamp(rect.top(), rect.bottom()))
        };

        // Dashed carrying-capacity line
        let cap_y = to_screen(0, k).y;
        let dash = 6.0;
        let gap = 6.0;
        let mut x = rect.left();
        while x < rect.right() {
            painter.line_segment(
                [
                    egui::pos2(x, cap_y),
                    egui::pos2((x + dash).min(rect.right()), cap_y),
                ],
                egui::Stroke::new(1.0, egui::Color32::from_rgb(220, 80, 80)),
            );
            x += dash + gap;
        }
        painter.text(
            egui::pos2(rect.left() + 5.0, cap_y - 10.0),
            egui::Align2::LEFT_CENTER,
            format!("K = {:.0}", k),
            egui::FontId::proportional(10.0),
            egui::Color32::from_rgb(220, 80, 80),
        );

        // Trajectory
        for t in 1..history.len() {
            painter.line_segment(
                [to_screen(t - 1, history[t - 1]), to_screen(t, history[t])],
                egui::Stroke::new(2.0, egui::Color32::from_rgb(100, 150, 255)),
            );
        }

        // Axis extents
        painter.text(
            egui::pos2(rect.left() + 3.0, rect.bottom() - 10.0),
            egui::Align2::LEFT_CENTER,
            "0",
            egui::FontId::proportional(10.0),
            egui::Color32::GRAY,
        );
        painter.text(
            egui::pos2(rect.right() - 3.0, rect.bottom() - 10.0),
            egui::Align2::RIGHT_CENTER,
            format!("{}", history.len().saturating_sub(1)),
            egui::FontId::proportional(10.0),
            egui::Color32::GRAY,
        );
    }
}

const EXAMPLE_STRAND_A: &str = "ATGCGTAACGTT";
// Complement of the example strand with anomalies at positions 5 and 10
const EXAMPLE_STRAND_B: &str = "TACGGATTGTAA";

const EXAMPLE_SEQUENCE: &str = "GGAATTCATCGGAATTCTAGAATTC";
const EXAMPLE_SITE: &str = "GAATTC";
