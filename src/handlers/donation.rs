use crate::app::App;
use crate::services::DonationService;
use crate::state::donation::{DetailsFocus, AMOUNT_PRESETS, FUNDS};
use crate::state::{AppMode, DonationStep};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle donation form input, step by step
pub fn handle_donation_input(key: KeyEvent, app: &mut App) {
    match app.donation.step {
        DonationStep::Amount => handle_amount_step(key, app),
        DonationStep::Frequency => handle_frequency_step(key, app),
        DonationStep::Details => handle_details_step(key, app),
        DonationStep::Review => handle_review_step(key, app),
        // no cancellation once submitted; the tick handler finishes it
        DonationStep::Processing => {}
        DonationStep::Confirmed => handle_confirmed_step(key, app),
    }
}

fn handle_amount_step(key: KeyEvent, app: &mut App) {
    let slots = crate::state::DonationState::amount_slots();
    let form = &mut app.donation;
    match key.code {
        KeyCode::Left | KeyCode::Up => {
            form.preset_selected = (form.preset_selected + slots - 1) % slots;
            form.error = None;
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
            form.preset_selected = (form.preset_selected + 1) % slots;
            form.error = None;
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            // typing implies the custom slot
            form.preset_selected = AMOUNT_PRESETS.len();
            form.custom_amount.push(c);
            form.error = None;
        }
        KeyCode::Backspace => {
            if form.custom_slot_selected() {
                form.custom_amount.pop();
            }
        }
        KeyCode::Enter => {
            match DonationService::parse_amount(&form.amount_text(), app.config.max_donation_amount)
            {
                Ok(_) => {
                    form.error = None;
                    form.step = DonationStep::Frequency;
                }
                Err(reason) => form.error = Some(reason),
            }
        }
        KeyCode::Esc => {
            app.donation.reset();
            app.ui.set_mode(AppMode::MainMenu);
        }
        _ => {}
    }
}

fn handle_frequency_step(key: KeyEvent, app: &mut App) {
    let form = &mut app.donation;
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char(' ') => {
            form.frequency = form.frequency.toggle();
        }
        KeyCode::Up => {
            form.fund_selected = (form.fund_selected + FUNDS.len() - 1) % FUNDS.len();
        }
        KeyCode::Down => {
            form.fund_selected = (form.fund_selected + 1) % FUNDS.len();
        }
        KeyCode::Enter => {
            form.step = DonationStep::Details;
        }
        KeyCode::Esc => {
            form.step = DonationStep::Amount;
        }
        _ => {}
    }
}

fn handle_details_step(key: KeyEvent, app: &mut App) {
    let form = &mut app.donation;
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
            form.details_focus = match form.details_focus {
                DetailsFocus::Name => DetailsFocus::Email,
                DetailsFocus::Email => DetailsFocus::Name,
            };
        }
        KeyCode::Char(c) => {
            match form.details_focus {
                DetailsFocus::Name => form.donor_name.push(c),
                DetailsFocus::Email => form.donor_email.push(c),
            }
            form.error = None;
        }
        KeyCode::Backspace => {
            match form.details_focus {
                DetailsFocus::Name => form.donor_name.pop(),
                DetailsFocus::Email => form.donor_email.pop(),
            };
        }
        KeyCode::Enter => {
            if form.details_focus == DetailsFocus::Name {
                form.details_focus = DetailsFocus::Email;
                return;
            }
            let checked = DonationService::validate_name(&form.donor_name)
                .and_then(|name| {
                    DonationService::validate_email(&form.donor_email).map(|email| (name, email))
                });
            match checked {
                Ok((name, email)) => {
                    form.donor_name = name;
                    form.donor_email = email;
                    form.error = None;
                    form.step = DonationStep::Review;
                }
                Err(reason) => form.error = Some(reason),
            }
        }
        KeyCode::Esc => {
            form.step = DonationStep::Frequency;
        }
        _ => {}
    }
}

fn handle_review_step(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            let tick = app.ui.tick_count;
            let delay = app.config.donation_processing_ticks;
            app.donation.begin_processing(tick, delay);
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.donation.step = DonationStep::Amount;
        }
        KeyCode::Esc => {
            app.donation.step = DonationStep::Details;
        }
        _ => {}
    }
}

fn handle_confirmed_step(key: KeyEvent, app: &mut App) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.donation.reset();
        app.ui.set_mode(AppMode::MainMenu);
        app.toast("Thank you for supporting Harborlight");
    }
}
