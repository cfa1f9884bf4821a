//! The interactive password form.

use std::borrow::Cow;
use std::io;

use anyhow::Context;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

use crate::ProgError;
use passgen::length::{validate_length, MAX_LENGTH, MIN_LENGTH};
use passgen::{CharClass, CharClassSet, FormState};

#[derive(Clone, Copy)]
enum Action {
    SetLength,
    ChooseClasses,
    Generate,
    Copy,
    Quit,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::Generate,
        Action::SetLength,
        Action::ChooseClasses,
        Action::Copy,
        Action::Quit,
    ];

    fn label(self, state: &FormState) -> Cow<'static, str> {
        match self {
            Action::SetLength => Cow::from(format!("Password length ({})", state.length())),
            Action::ChooseClasses => Cow::from("Character classes"),
            Action::Generate if !state.can_generate() => {
                Cow::from("Generate password (no character class selected)")
            }
            Action::Generate => Cow::from("Generate password"),
            Action::Copy => Cow::from("Copy password to clipboard"),
            Action::Quit => Cow::from("Quit"),
        }
    }
}

pub(crate) fn run_form(mut state: FormState) -> Result<(), ProgError> {
    let theme = ColorfulTheme::default();
    loop {
        show_state(&state)?;

        let labels = Action::ALL
            .iter()
            .map(|action| action.label(&state))
            .collect::<Vec<_>>();
        let selection = Select::with_theme(&theme)
            .items(&labels)
            .default(0)
            .interact_opt()
            .context("failed to query your selection")?;
        let action = match selection {
            Some(index) => Action::ALL[index],
            None => return Ok(()),
        };

        match action {
            Action::SetLength => prompt_length(&theme, &mut state)?,
            Action::ChooseClasses => prompt_classes(&theme, &mut state)?,
            Action::Generate => generate(&mut state),
            Action::Copy => match state.password() {
                Some(password) => {
                    crate::pw::send_to_clipboard(password.as_str().as_bytes())?;
                    eprintln!("Copied to the clipboard.");
                }
                None => eprintln!("{}", style("Nothing to copy yet.").yellow()),
            },
            Action::Quit => return Ok(()),
        }
    }
}

fn generate(state: &mut FormState) {
    let entropy = state.generator().entropy_bits();
    match state.generate_password() {
        Ok(password) => {
            println!();
            println!("{}", style(password.as_str()).bold());
            eprintln!("{}", style(format!("~{entropy:.0} bits of entropy")).dim());
            println!();
        }
        Err(err) => eprintln!("{}", style(err).red()),
    }
}

fn prompt_length(theme: &ColorfulTheme, state: &mut FormState) -> Result<(), ProgError> {
    let input: String = Input::with_theme(theme)
        .with_prompt(format!("Password length ({MIN_LENGTH}-{MAX_LENGTH})"))
        .with_initial_text(state.length().to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            validate_length(input).map_err(|err| err.to_string())
        })
        .interact_text()
        .context("failed to read the password length")?;
    state.set_length_input(&input)?;
    Ok(())
}

fn prompt_classes(theme: &ColorfulTheme, state: &mut FormState) -> Result<(), ProgError> {
    let labels = CharClass::ALL
        .iter()
        .map(|class| format!("{:<12} {}", class.name(), class.members()))
        .collect::<Vec<_>>();
    let checked = CharClass::ALL
        .iter()
        .map(|class| state.classes().contains(*class))
        .collect::<Vec<_>>();
    let chosen = MultiSelect::with_theme(theme)
        .with_prompt("Character classes (space to toggle, enter to accept)")
        .items(&labels)
        .defaults(&checked)
        .interact_opt()
        .context("failed to query your selection")?;
    if let Some(chosen) = chosen {
        state.set_classes(chosen.into_iter().map(|i| CharClass::ALL[i]).collect());
    }
    Ok(())
}

fn show_state(state: &FormState) -> Result<(), ProgError> {
    struct ClassRow {
        class: CharClass,
        selected: bool,
    }

    impl crate::table::TableDisplay for ClassRow {
        fn columns() -> usize {
            3
        }

        fn column_name(column_index: usize) -> &'static str {
            match column_index {
                0 => "Character class",
                1 => "Characters",
                2 => "Selected",
                _ => panic!(),
            }
        }

        fn item(&self, column_index: usize) -> Cow<'_, str> {
            match column_index {
                0 => Cow::from(self.class.name()),
                1 => Cow::from(self.class.members().len().to_string()),
                2 => Cow::from(if self.selected { "yes" } else { "no" }),
                _ => panic!(),
            }
        }
    }

    let rows = class_rows(state.classes())
        .map(|(class, selected)| ClassRow { class, selected })
        .collect::<Vec<_>>();
    crate::table::display_table(&rows, io::stderr()).context("failed to output table")?;
    eprintln!("Length: {}", state.length());
    eprintln!("Password: {}", password_display(state));
    Ok(())
}

fn password_display(state: &FormState) -> Cow<'_, str> {
    match state.password() {
        Some(password) => Cow::from(password.as_str()),
        None => Cow::from("(none generated yet)"),
    }
}

fn class_rows(classes: CharClassSet) -> impl Iterator<Item = (CharClass, bool)> {
    CharClass::ALL
        .into_iter()
        .map(move |class| (class, classes.contains(class)))
}
