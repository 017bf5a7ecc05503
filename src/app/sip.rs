use eframe::egui::{self, Align2, Key, RichText, TextEdit, Ui, Widget};
use egui_extras::{Column, TableBuilder};
use tracing::warn;

use crate::app::calculator::{CalculationResult, ContributionTiming, RawInputs};
use crate::app::presenter::{format_currency, CURRENCY_SYMBOL};

const MONTHLY_HINT: &str = "5000";
const RATE_HINT: &str = "12";
const TENURE_HINT: &str = "10";

/// What the result section currently shows.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Outcome {
    #[default]
    NoResult,
    Shown(CalculationResult),
}

/// The SIP calculator form. Only [`SipScreen::calculate`] changes the outcome;
/// editing the inputs leaves the previous result in place.
#[derive(Debug, Default)]
pub struct SipScreen {
    pub inputs: RawInputs,
    pub timing: ContributionTiming,
    outcome: Outcome,
    alert: Option<&'static str>,
}

impl SipScreen {
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn calculate(&mut self) -> &Outcome {
        self.outcome = match self.inputs.validate() {
            Ok(inputs) => {
                self.alert = None;
                Outcome::Shown(inputs.calculate_with(self.timing))
            }
            Err(e) => {
                warn!(field = %e.field, reason = ?e.reason, "rejected sip inputs");
                self.alert = Some(e.user_message());
                Outcome::NoResult
            }
        };
        &self.outcome
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.heading("SIP Calculator");
        ui.add_space(8.0);

        let blocked = self.alert.is_some();
        ui.add_enabled_ui(!blocked, |ui| {
            let mut submitted = false;
            egui::Grid::new("sip_inputs")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    submitted |= input_row(
                        ui,
                        &format!("Monthly Investment ({CURRENCY_SYMBOL})"),
                        &mut self.inputs.monthly_investment,
                        MONTHLY_HINT,
                    );
                    submitted |= input_row(
                        ui,
                        "Expected Return Rate (% p.a.)",
                        &mut self.inputs.annual_rate,
                        RATE_HINT,
                    );
                    submitted |= input_row(
                        ui,
                        "Time Period (Years)",
                        &mut self.inputs.tenure_years,
                        TENURE_HINT,
                    );
                });

            ui.horizontal(|ui| {
                for timing in [ContributionTiming::StartOfMonth, ContributionTiming::EndOfMonth] {
                    ui.radio_value(&mut self.timing, timing, timing.to_string());
                }
            });

            ui.add_space(8.0);
            if ui.button("Calculate").clicked() || submitted {
                self.calculate();
            }
        });

        if let Outcome::Shown(result) = &self.outcome {
            ui.separator();
            result_table(ui, result);
        }

        self.show_alert(ui.ctx());
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.alert else {
            return;
        };

        let mut dismissed = ctx.input(|i| i.key_pressed(Key::Escape));
        egui::Window::new("Invalid Input")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.dismiss_alert();
        }
    }
}

/// Returns true when the field was submitted with Enter.
fn input_row(ui: &mut Ui, label: &str, value: &mut String, hint: &str) -> bool {
    ui.label(label);
    let response = TextEdit::singleline(value)
        .hint_text(hint)
        .desired_width(160.0)
        .ui(ui);
    ui.end_row();

    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}

fn result_table(ui: &mut Ui, result: &CalculationResult) {
    let rows = [
        ("Future Value", result.future_value),
        ("Total Invested", result.total_invested),
        ("Estimated Returns", result.estimated_returns),
    ];

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .body(|mut body| {
            for (label, value) in rows {
                body.row(24.0, |mut row| {
                    row.col(|ui| {
                        ui.label(label);
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(format_currency(Some(value))).strong());
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::calculator::INVALID_INPUT_MESSAGE;

    fn screen_with(p: &str, rate: &str, years: &str) -> SipScreen {
        SipScreen {
            inputs: RawInputs::new(p, rate, years),
            ..Default::default()
        }
    }

    #[test]
    fn starts_idle() {
        let screen = SipScreen::default();
        assert_eq!(screen.outcome(), &Outcome::NoResult);
        assert_eq!(screen.alert(), None);
    }

    #[test]
    fn valid_inputs_show_result() {
        let mut screen = screen_with("5000", "12", "10");
        let Outcome::Shown(result) = *screen.calculate() else {
            panic!("expected a result");
        };
        assert_eq!(result.total_invested, 600_000.0);
        assert_eq!(format_currency(Some(result.future_value)), "₹ 1,161,695.38");
        assert_eq!(screen.alert(), None);
    }

    #[test]
    fn invalid_inputs_clear_previous_result_and_raise_alert() {
        let mut screen = screen_with("5000", "12", "10");
        screen.calculate();
        assert!(matches!(screen.outcome(), Outcome::Shown(_)));

        screen.inputs.tenure_years = "0".to_owned();
        assert_eq!(screen.calculate(), &Outcome::NoResult);
        assert_eq!(screen.alert(), Some(INVALID_INPUT_MESSAGE));
    }

    #[test]
    fn editing_does_not_recalculate() {
        let mut screen = screen_with("1000", "0", "5");
        let before = *screen.calculate();

        screen.inputs.monthly_investment = "abc".to_owned();
        assert_eq!(screen.outcome(), &before);
        assert_eq!(screen.alert(), None);
    }

    #[test]
    fn recalculating_replaces_result_and_alert() {
        let mut screen = screen_with("", "12", "10");
        screen.calculate();
        assert!(screen.alert().is_some());

        screen.inputs.monthly_investment = "1000".to_owned();
        screen.inputs.annual_rate = "0".to_owned();
        screen.inputs.tenure_years = "5".to_owned();
        let Outcome::Shown(result) = *screen.calculate() else {
            panic!("expected a result");
        };
        assert_eq!(result.future_value, 60_000.0);
        assert_eq!(screen.alert(), None);
    }

    #[test]
    fn timing_choice_feeds_the_calculation() {
        let mut screen = screen_with("5000", "12", "10");
        screen.timing = ContributionTiming::EndOfMonth;
        let Outcome::Shown(result) = *screen.calculate() else {
            panic!("expected a result");
        };
        assert_eq!(format_currency(Some(result.future_value)), "₹ 1,150,193.45");
    }

    #[test]
    fn dismissing_alert_keeps_idle() {
        let mut screen = screen_with("-5", "12", "10");
        screen.calculate();
        screen.dismiss_alert();
        assert_eq!(screen.alert(), None);
        assert_eq!(screen.outcome(), &Outcome::NoResult);
    }
}
