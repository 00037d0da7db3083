#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path};

use co2sys_toolbox::{
    app,
    carbonate::constants::{KBisulfate, KCarbonic, KFluoride, TotalBorate},
    carbonate::parameters::Parameter,
    carbonate::solver::PyCo2SysSolver,
    carbonate::validation::{RawEntries, ValidationError},
    config,
    history::{ResultHistory, DEFAULT_HISTORY_FILE},
    i18n,
    wizard::{Wizard, WizardError, WizardStep},
};

fn main() -> Result<(), eframe::Error> {
    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(900.0, 900.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_default();
    eframe::run_native(
        "CO2Sys Program",
        native,
        Box::new(move |cc| {
            if let Some(font_path) = app_cfg.custom_font_path.clone() {
                if let Err(e) = load_custom_font(&cc.egui_ctx, &font_path) {
                    eprintln!("Font error: {e}");
                }
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// 결과 한 줄의 표시 형식: "이름: 값 ± 불확도".
fn format_result_line(label: &str, value: f64, uncertainty: f64) -> String {
    format!("{label}: {value} ± {uncertainty}")
}

/// 값/불확도 한 쌍을 입력받는 그리드 행.
fn value_row(ui: &mut egui::Ui, label: &str, value: &mut String, uncertainty: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(150.0));
    ui.label("±");
    ui.add(egui::TextEdit::singleline(uncertainty).desired_width(60.0));
    ui.end_row();
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    solver: PyCo2SysSolver,
    wizard: Wizard,
    // 값 입력 패널의 10개 원문 필드
    par1_value: String,
    par1_uncertainty: String,
    par2_value: String,
    par2_uncertainty: String,
    salinity_value: String,
    salinity_uncertainty: String,
    temperature_value: String,
    temperature_uncertainty: String,
    pressure_value: String,
    pressure_uncertainty: String,
    // 인라인 메시지
    selection_message: Option<String>,
    input_message: Option<String>,
    solve_message: Option<String>,
    // 설정/도움말 모달
    show_settings_modal: bool,
    show_instructions_modal: bool,
    lang_input: String,
    lang_save_status: Option<String>,
    history_path_input: String,
    window_alpha: f32,
    ui_scale: f32,
    always_on_top: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        eprintln!("GUI language resolved: {lang_code}");
        let lang_input = config.language.clone();
        let history_path_input = config.history_path.clone();
        let custom_font_path = config.custom_font_path.clone().unwrap_or_default();
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            ui_scale: config.ui_scale.clamp(0.8, 1.6),
            always_on_top: config.always_on_top,
            config,
            tr,
            solver: PyCo2SysSolver,
            wizard: Wizard::new(),
            par1_value: String::new(),
            par1_uncertainty: String::new(),
            par2_value: String::new(),
            par2_uncertainty: String::new(),
            salinity_value: String::new(),
            salinity_uncertainty: String::new(),
            temperature_value: String::new(),
            temperature_uncertainty: String::new(),
            pressure_value: String::new(),
            pressure_uncertainty: String::new(),
            selection_message: None,
            input_message: None,
            solve_message: None,
            show_settings_modal: false,
            show_instructions_modal: false,
            lang_input,
            lang_save_status: None,
            history_path_input,
            custom_font_path,
            font_load_error: None,
        }
    }

    fn raw_entries(&self) -> RawEntries {
        RawEntries {
            par1: self.par1_value.clone(),
            par2: self.par2_value.clone(),
            salinity: self.salinity_value.clone(),
            temperature: self.temperature_value.clone(),
            pressure: self.pressure_value.clone(),
            par1_uncertainty: self.par1_uncertainty.clone(),
            par2_uncertainty: self.par2_uncertainty.clone(),
            salinity_uncertainty: self.salinity_uncertainty.clone(),
            temperature_uncertainty: self.temperature_uncertainty.clone(),
            pressure_uncertainty: self.pressure_uncertainty.clone(),
        }
    }

    fn reset_value_fields(&mut self) {
        self.par1_value.clear();
        self.par1_uncertainty.clear();
        self.par2_value.clear();
        self.par2_uncertainty.clear();
        self.salinity_value.clear();
        self.salinity_uncertainty.clear();
        self.temperature_value.clear();
        self.temperature_uncertainty.clear();
        self.pressure_value.clear();
        self.pressure_uncertainty.clear();
    }

    /// 1단계: 파라미터 2개 선택.
    fn ui_parameter_selector(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.select.heading", "Select input parameters:"),
            &txt(
                "gui.select.tip",
                "Pick the two carbonate-system parameters you have measured.",
            ),
        );
        ui.add_space(4.0);
        let editable = self.wizard.step() == WizardStep::SelectingParameters;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.add_enabled_ui(editable, |ui| {
                ui.horizontal(|ui| {
                    for parameter in Parameter::ALL {
                        let mut checked = self.wizard.picks().contains(parameter);
                        if ui.checkbox(&mut checked, parameter.label()).changed() {
                            // 상한(2개)을 넘는 체크는 위저드가 거부하고
                            // 다음 프레임에 체크박스가 원상태로 돌아간다.
                            self.wizard.toggle_parameter(parameter);
                        }
                    }
                });
                ui.add_space(4.0);
                if ui.button(txt("gui.select.next", "Next")).clicked() {
                    match self.wizard.confirm_parameters() {
                        Ok(()) => self.selection_message = None,
                        Err(_) => {
                            self.selection_message =
                                Some(txt("gui.select.need_two", "Please Select Two Parameters"));
                        }
                    }
                }
            });
            if let Some(msg) = &self.selection_message {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            }
        });
    }

    /// 2단계: 값/불확도 10개 필드 입력.
    fn ui_value_input(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let Some((par1, par2)) = self.wizard.picks().chosen_pair() else {
            return;
        };
        ui.separator();
        let editable = self.wizard.step() == WizardStep::EnteringValues;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.add_enabled_ui(editable, |ui| {
                ui.heading(txt("gui.input.heading_values", "Input Parameter Values"));
                egui::Grid::new("parameter_values")
                    .num_columns(4)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        let measured = txt("gui.input.measured", "Measured {par} Value:");
                        value_row(
                            ui,
                            &fill_template(&measured, &[("par", par1.label().to_string())]),
                            &mut self.par1_value,
                            &mut self.par1_uncertainty,
                        );
                        value_row(
                            ui,
                            &fill_template(&measured, &[("par", par2.label().to_string())]),
                            &mut self.par2_value,
                            &mut self.par2_uncertainty,
                        );
                    });
                ui.add_space(8.0);
                ui.heading(txt("gui.input.heading_conditions", "Input Initial Conditions"));
                egui::Grid::new("initial_conditions")
                    .num_columns(4)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        value_row(
                            ui,
                            &txt("gui.input.salinity", "Salinity:"),
                            &mut self.salinity_value,
                            &mut self.salinity_uncertainty,
                        );
                        value_row(
                            ui,
                            &txt("gui.input.temperature", "Temperature (oC):"),
                            &mut self.temperature_value,
                            &mut self.temperature_uncertainty,
                        );
                        value_row(
                            ui,
                            &txt("gui.input.pressure", "Pressure (dbar):"),
                            &mut self.pressure_value,
                            &mut self.pressure_uncertainty,
                        );
                    });
            });
            if let Some(msg) = &self.input_message {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            }
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(editable, egui::Button::new(txt("gui.input.next", "Next")))
                    .clicked()
                {
                    let entries = self.raw_entries();
                    match self.wizard.submit_values(&entries) {
                        Ok(()) => self.input_message = None,
                        Err(WizardError::Validation(ValidationError::FieldsMissing)) => {
                            self.input_message = Some(txt(
                                "gui.input.missing",
                                "Parameter, initial condition, and/or error values are missing",
                            ));
                        }
                        Err(WizardError::Validation(ValidationError::NonNumeric)) => {
                            self.input_message = Some(txt(
                                "gui.input.non_numeric",
                                "One or more inputs is non-numeric",
                            ));
                        }
                        Err(e) => {
                            self.input_message =
                                Some(format!("{}: {e}", txt("gui.error_prefix", "Error")));
                        }
                    }
                }
                if ui
                    .add_enabled(editable, egui::Button::new(txt("gui.input.back", "Back")))
                    .clicked()
                {
                    self.wizard.back();
                    self.reset_value_fields();
                    self.input_message = None;
                    self.solve_message = None;
                }
            });
        });
    }

    /// 3단계: 평형상수 세트 선택.
    fn ui_constant_selector(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.separator();
        let editable = self.wizard.step() == WizardStep::SelectingConstants;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(txt("gui.consts.heading", "Select Eq. Constant Sets (K1, K2)"));
            ui.add_space(4.0);
            ui.add_enabled_ui(editable, |ui| {
                egui::Grid::new("constant_sets")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.consts.carbonic", "H2CO3 (Default: Sulphis et al., 2020)"),
                            &txt("gui.consts.carbonic_tip", "Carbonic acid K1/K2 constant set"),
                        );
                        let selected = self.wizard.constants().k_carbonic;
                        egui::ComboBox::from_id_source("k_carbonic")
                            .selected_text(selected.label())
                            .width(320.0)
                            .show_ui(ui, |ui| {
                                for option in KCarbonic::ALL {
                                    ui.selectable_value(
                                        &mut self.wizard.constants_mut().k_carbonic,
                                        option,
                                        option.label(),
                                    );
                                }
                            });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.consts.bisulfate", "HSO4- (Default: Dickson, 1990)"),
                            &txt("gui.consts.bisulfate_tip", "Bisulfate dissociation constant"),
                        );
                        let selected = self.wizard.constants().k_bisulfate;
                        egui::ComboBox::from_id_source("k_bisulfate")
                            .selected_text(selected.label())
                            .width(320.0)
                            .show_ui(ui, |ui| {
                                for option in KBisulfate::ALL {
                                    ui.selectable_value(
                                        &mut self.wizard.constants_mut().k_bisulfate,
                                        option,
                                        option.label(),
                                    );
                                }
                            });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.consts.borate", "Total Borate (Default: Uppström, 1974)"),
                            &txt("gui.consts.borate_tip", "Total borate parameterization"),
                        );
                        let selected = self.wizard.constants().total_borate;
                        egui::ComboBox::from_id_source("total_borate")
                            .selected_text(selected.label())
                            .width(320.0)
                            .show_ui(ui, |ui| {
                                for option in TotalBorate::ALL {
                                    ui.selectable_value(
                                        &mut self.wizard.constants_mut().total_borate,
                                        option,
                                        option.label(),
                                    );
                                }
                            });
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.consts.fluoride", "HF (Default: Dickson & Riley, 1979)"),
                            &txt("gui.consts.fluoride_tip", "Hydrogen fluoride constant"),
                        );
                        let selected = self.wizard.constants().k_fluoride;
                        egui::ComboBox::from_id_source("k_fluoride")
                            .selected_text(selected.label())
                            .width(320.0)
                            .show_ui(ui, |ui| {
                                for option in KFluoride::ALL {
                                    ui.selectable_value(
                                        &mut self.wizard.constants_mut().k_fluoride,
                                        option,
                                        option.label(),
                                    );
                                }
                            });
                        ui.end_row();
                    });
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button(txt("gui.consts.get_results", "Get Results")).clicked() {
                        let history = ResultHistory::new(&self.config.history_path);
                        match app::solve_and_record(&mut self.wizard, &self.solver, &history) {
                            Ok(_) => self.solve_message = None,
                            Err(e) => {
                                self.solve_message =
                                    Some(format!("{}: {e}", txt("gui.error_prefix", "Error")));
                            }
                        }
                    }
                    if ui.button(txt("gui.consts.back", "Back")).clicked() {
                        self.wizard.back();
                        self.solve_message = None;
                    }
                });
            });
            if let Some(msg) = &self.solve_message {
                ui.colored_label(ui.visuals().error_fg_color, msg);
            }
        });
    }

    /// 4단계: 결과 표시와 지우기.
    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.separator();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            for line in self.wizard.result_lines() {
                ui.label(format_result_line(
                    line.parameter.label(),
                    line.value,
                    line.uncertainty,
                ));
            }
            ui.add_space(4.0);
            if ui.button(txt("gui.results.clear", "Clear Results")).clicked() {
                self.wizard.clear_results();
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "CO2Sys Program"));
                ui.separator();
                if ui
                    .button(txt("gui.instructions.button", "Instructions"))
                    .clicked()
                {
                    self.show_instructions_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        // 사용법 안내 모달
        if self.show_instructions_modal {
            let mut close_clicked = false;
            egui::Window::new(txt("gui.instructions.title", "CO2Sys Instructions"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_instructions_modal)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.label(txt(
                            "gui.instructions.body",
                            "----- Instructions -----\n\n\
                             1. Initialize the program\n\n\
                             2. Select TWO parameters for which you have known values, then click \"Next\"\n\n\
                             3. Input the measured values for the parameters, the initial fluid conditions, and all associated errors\n\n\
                             4. Once fully and correctly inputted, click \"Next\" or if you need to change your parameters, click \"Back\" and repeat Step 2\n\n\
                             5. Select your desired constant sets from each dropdown for H2CO3, HSO4-, Total Borate, and HF\n\n\
                             6. Once all constant sets are selected, click \"Get Results\" to get results or click \"Back\" to edit input values\n\n\
                             7. Results are presented in the form \"Parameter Name: Parameter Value ± Error Value\"\n\n\
                             8. Results are cleared and replaced anytime the \"Get Results\" button is pressed but can be manually cleared using the \"Clear Results\" button\n\n\
                             9. Inputs are locked for editing once the \"Next\" buttons are pressed and \"Back\" buttons must be pressed to edit earlier inputs/selections\n\n\
                             10. Enjoy!",
                        ));
                        ui.add_space(8.0);
                        if ui.button(txt("gui.instructions.close", "Okay")).clicked() {
                            close_clicked = true;
                        }
                    });
                });
            if close_clicked {
                self.show_instructions_modal = false;
            }
        }

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings.window_title", "Program Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();

                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    ui.separator();

                    ui.label(txt("gui.settings.history", "Result history workbook"));
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.history_path_input)
                                .desired_width(280.0),
                        );
                        if ui.button(txt("gui.settings.browse", "Browse...")).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("Excel workbook", &["xlsx"])
                                .set_file_name(DEFAULT_HISTORY_FILE)
                                .save_file()
                            {
                                self.history_path_input = path.display().to_string();
                            }
                        }
                    });
                    ui.separator();

                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));
                    ui.separator();

                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.custom_font_path)
                                .desired_width(280.0),
                        );
                        if ui.button(txt("gui.settings.font_pick", "Choose...")).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("Font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                                match load_custom_font(ui.ctx(), &self.custom_font_path) {
                                    Ok(()) => self.font_load_error = None,
                                    Err(e) => self.font_load_error = Some(e),
                                }
                            }
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(ui.visuals().error_fg_color, err);
                    }
                    ui.separator();

                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.history_path = self.history_path_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        self.config.always_on_top = self.always_on_top;
                        self.config.ui_scale = self.ui_scale;
                        self.config.custom_font_path = if self.custom_font_path.trim().is_empty() {
                            None
                        } else {
                            Some(self.custom_font_path.clone())
                        };
                        let resolved = i18n::resolve_language(
                            &self.lang_input,
                            Some(self.config.language.as_str()),
                        );
                        match self.config.save() {
                            Ok(()) => {
                                self.tr = i18n::Translator::new_with_pack(
                                    &resolved,
                                    self.config.language_pack_dir.as_deref(),
                                );
                                self.lang_save_status =
                                    Some(txt("gui.settings.saved", "Settings saved."));
                            }
                            Err(e) => {
                                self.lang_save_status =
                                    Some(format!("{}: {e}", txt("gui.error_prefix", "Error")));
                            }
                        }
                    }
                    if let Some(status) = &self.lang_save_status {
                        ui.small(status);
                    }
                });
        }

        // 본문: 네 패널을 위에서 아래로 쌓는다. 진행 단계에 따라 보이거나 잠긴다.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui_parameter_selector(ui);
                if self.wizard.step() != WizardStep::SelectingParameters {
                    self.ui_value_input(ui);
                }
                if matches!(
                    self.wizard.step(),
                    WizardStep::SelectingConstants | WizardStep::ShowingResults
                ) {
                    self.ui_constant_selector(ui);
                }
                if self.wizard.step() == WizardStep::ShowingResults {
                    self.ui_results(ui);
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_line_uses_plus_minus_form() {
        let line = format_result_line("pH", 7.85, 0.02);
        assert_eq!(line, "pH: 7.85 ± 0.02");
    }

    #[test]
    fn fill_template_replaces_named_vars() {
        let out = fill_template(
            "Measured {par} Value:",
            &[("par", "DIC (μmol·kg−1)".to_string())],
        );
        assert_eq!(out, "Measured DIC (μmol·kg−1) Value:");
    }

    #[test]
    fn fresh_app_starts_at_parameter_selection() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.wizard.step(), WizardStep::SelectingParameters);
        assert!(app.wizard.picks().is_empty());
    }

    #[test]
    fn default_config_points_at_original_history_file() {
        let cfg = config::Config::default();
        assert_eq!(cfg.history_path, DEFAULT_HISTORY_FILE);
    }
}
