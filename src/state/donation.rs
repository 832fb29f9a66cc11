use uuid::Uuid;

/// Preset gift amounts; the slot after the last preset is the custom
/// amount field.
pub const AMOUNT_PRESETS: [u32; 4] = [25, 50, 100, 250];

/// Designated funds a gift can be directed to.
pub const FUNDS: [&str; 5] = [
    "Where needed most",
    "Scholarship fund",
    "Healthcare fund",
    "Empowerment fund",
    "Emergency relief",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationStep {
    Amount,
    Frequency,
    Details,
    Review,
    Processing,
    Confirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    OneTime,
    Monthly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::OneTime => "One-time",
            Frequency::Monthly => "Monthly",
        }
    }

    pub fn toggle(self) -> Frequency {
        match self {
            Frequency::OneTime => Frequency::Monthly,
            Frequency::Monthly => Frequency::OneTime,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsFocus {
    Name,
    Email,
}

/// State for the multi-step donation form.
///
/// "Processing" is a fixed tick-deadline delay for UX pacing only; no
/// payment work happens, nothing is persisted, and there is no
/// cancellation path once submitted.
pub struct DonationState {
    pub step: DonationStep,

    pub preset_selected: usize,
    pub custom_amount: String,
    pub frequency: Frequency,
    pub fund_selected: usize,

    pub donor_name: String,
    pub donor_email: String,
    pub details_focus: DetailsFocus,

    pub error: Option<String>,
    pub processing_until: Option<u64>,
    pub reference: Option<String>,
}

impl Default for DonationState {
    fn default() -> Self {
        Self {
            step: DonationStep::Amount,
            preset_selected: 1,
            custom_amount: String::new(),
            frequency: Frequency::OneTime,
            fund_selected: 0,
            donor_name: String::new(),
            donor_email: String::new(),
            details_focus: DetailsFocus::Name,
            error: None,
            processing_until: None,
            reference: None,
        }
    }
}

impl DonationState {
    /// Number of selectable slots on the amount step (presets + custom).
    pub fn amount_slots() -> usize {
        AMOUNT_PRESETS.len() + 1
    }

    pub fn custom_slot_selected(&self) -> bool {
        self.preset_selected == AMOUNT_PRESETS.len()
    }

    /// The raw amount string the user has chosen, preset or custom.
    pub fn amount_text(&self) -> String {
        if self.custom_slot_selected() {
            self.custom_amount.clone()
        } else {
            AMOUNT_PRESETS[self.preset_selected].to_string()
        }
    }

    pub fn fund_label(&self) -> &'static str {
        FUNDS[self.fund_selected.min(FUNDS.len() - 1)]
    }

    pub fn begin_processing(&mut self, tick_count: u64, delay_ticks: u64) {
        self.step = DonationStep::Processing;
        self.processing_until = Some(tick_count + delay_ticks);
        self.error = None;
    }

    /// Called from the tick handler once the deadline passes.
    pub fn finish_processing(&mut self) {
        let code = Uuid::new_v4().simple().to_string();
        self.reference = Some(format!("HL-{}", code[..8].to_uppercase()));
        self.processing_until = None;
        self.step = DonationStep::Confirmed;
    }

    pub fn processing_due(&self, tick_count: u64) -> bool {
        matches!(self.processing_until, Some(due) if tick_count >= due)
    }

    pub fn reset(&mut self) {
        *self = DonationState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_text_follows_the_selected_slot() {
        let mut form = DonationState::default();
        form.preset_selected = 0;
        assert_eq!(form.amount_text(), "25");
        form.preset_selected = AMOUNT_PRESETS.len();
        form.custom_amount = "75.50".to_string();
        assert_eq!(form.amount_text(), "75.50");
    }

    #[test]
    fn processing_fires_only_at_the_deadline() {
        let mut form = DonationState::default();
        form.begin_processing(100, 28);
        assert_eq!(form.step, DonationStep::Processing);
        assert!(!form.processing_due(127));
        assert!(form.processing_due(128));

        form.finish_processing();
        assert_eq!(form.step, DonationStep::Confirmed);
        let reference = form.reference.as_deref().expect("reference set");
        assert!(reference.starts_with("HL-"));
        assert_eq!(reference.len(), "HL-".len() + 8);
    }

    #[test]
    fn reset_returns_to_a_clean_form() {
        let mut form = DonationState::default();
        form.donor_name = "Ada".to_string();
        form.step = DonationStep::Review;
        form.reset();
        assert_eq!(form.step, DonationStep::Amount);
        assert!(form.donor_name.is_empty());
        assert!(form.reference.is_none());
    }
}
