use crate::combos::{generate, EnumerationMode};
use crate::error::{HomerowError, HrResult};
use crate::keycodes::{KeyCode, ModifierKey, HYPER, MEH};
use crate::keymap::HomeRowKeymap;
use crate::profile::{Condition, KeyDownOrder, Manipulator, Rule, ToEvent};
use tracing::debug;
use typed_builder::TypedBuilder;

pub const HOME_ROW_DESCRIPTION: &str = "Home row mods";

/// Apps where home/end keep their shell meaning.
pub const TERMINAL_BUNDLES: [&str; 2] = ["^com\\.apple\\.Terminal$", "^com\\.googlecode\\.iterm2$"];

#[derive(Debug, Clone, TypedBuilder)]
pub struct HomeRowOptions {
    pub keymap: HomeRowKeymap,
    #[builder(default = EnumerationMode::Permutations)]
    pub mode: EnumerationMode,
    /// `None` allows groups up to the whole keymap.
    #[builder(default, setter(strip_option))]
    pub max_size: Option<usize>,
    #[builder(default = KeyDownOrder::Strict)]
    pub key_down_order: KeyDownOrder,
    #[builder(default = HOME_ROW_DESCRIPTION.to_string(), setter(into))]
    pub description: String,
}

/// One manipulator per generated group, longest groups first.
pub fn home_row_mods(opts: &HomeRowOptions) -> HrResult<Rule> {
    let keys = opts.keymap.keys();
    let max_size = opts.max_size.unwrap_or(keys.len());
    let groups = generate(&keys, max_size, opts.mode);

    debug!(
        "Home row: {} keys, mode={}, max={} -> {} groups",
        keys.len(),
        opts.mode,
        max_size,
        groups.len()
    );

    let manipulators = groups
        .iter()
        .map(|group| group_manipulator(&opts.keymap, group, opts.key_down_order))
        .collect::<HrResult<Vec<_>>>()?;

    Ok(Rule::new(opts.description.clone()).manipulators(manipulators))
}

/// Tap types the key(s), hold sends the combined modifiers.
pub fn group_manipulator(
    keymap: &HomeRowKeymap,
    group: &[KeyCode],
    order: KeyDownOrder,
) -> HrResult<Manipulator> {
    let modifiers = keymap.modifiers_for(group)?;
    let (first, rest) = modifiers
        .split_first()
        .ok_or_else(|| HomerowError::InvalidKeymap("empty key group".to_string()))?;
    let held_key = first.key_code().ok_or_else(|| {
        HomerowError::InvalidKeymap(format!("modifier '{}' has no physical key", first))
    })?;
    let held = ToEvent::key(held_key).with_modifiers(rest).halt();

    if let [key] = group {
        return Ok(Manipulator::map(*key)
            .optional_any()
            .to_if_alone((*key).into())
            .to_if_held_down(held));
    }

    let mut manipulator = Manipulator::simultaneous(group, order);
    for (i, &key) in group.iter().enumerate() {
        let event = if i == group.len() - 1 {
            ToEvent::key(key).halt()
        } else {
            ToEvent::key(key)
        };
        manipulator = manipulator.to_if_alone(event);
    }
    Ok(manipulator.to_if_held_down(held))
}

pub fn shift_backspace_delete() -> Rule {
    Rule::new("Shift + backspace = delete").manipulators([Manipulator::map(
        KeyCode::DeleteOrBackspace,
    )
    .mandatory(&[ModifierKey::LeftShift])
    .to(KeyCode::DeleteForward.into())])
}

/// Home/end jump to line start/end outside terminals.
pub fn home_end() -> Rule {
    let outside = Condition::app_unless(&TERMINAL_BUNDLES);
    Rule::new("Home, end").manipulators([
        Manipulator::map(KeyCode::Home)
            .optional_any()
            .condition(outside.clone())
            .to(ToEvent::key(KeyCode::LeftArrow).with_modifiers(&[ModifierKey::LeftCommand])),
        Manipulator::map(KeyCode::End)
            .optional_any()
            .condition(outside)
            .to(ToEvent::key(KeyCode::RightArrow).with_modifiers(&[ModifierKey::LeftCommand])),
    ])
}

pub fn home_end_terminal() -> Rule {
    let inside = Condition::app_if(&TERMINAL_BUNDLES);
    Rule::new("Home, end, terminal").manipulators([
        Manipulator::map(KeyCode::Home)
            .optional_any()
            .condition(inside.clone())
            .to(ToEvent::key(KeyCode::A).with_modifiers(&[ModifierKey::LeftCommand])),
        Manipulator::map(KeyCode::End)
            .optional_any()
            .condition(inside)
            .to(ToEvent::key(KeyCode::E).with_modifiers(&[ModifierKey::LeftCommand])),
    ])
}

/// Left control + h/j/k/l as auto-repeating arrows.
///
/// j, k and l sit on the extended home row, so this rule has to be listed
/// before the home row block to win the match.
pub fn arrow_repeat() -> Rule {
    let arrows = [
        (KeyCode::H, KeyCode::LeftArrow),
        (KeyCode::J, KeyCode::DownArrow),
        (KeyCode::K, KeyCode::UpArrow),
        (KeyCode::L, KeyCode::RightArrow),
    ];
    Rule::new("Control + hjkl = arrows").manipulators(arrows.into_iter().map(|(from, to)| {
        Manipulator::map(from)
            .mandatory(&[ModifierKey::LeftControl])
            .to(ToEvent::key(to).repeat(true))
    }))
}

/// Command + option shortcuts that type markdown markers.
pub fn markdown_helpers() -> Rule {
    let chord = [ModifierKey::LeftCommand, ModifierKey::LeftOption];
    let shifted = |key| ToEvent::key(key).with_modifiers(&[ModifierKey::LeftShift]);
    let typed = |events: Vec<ToEvent>, trigger| {
        events
            .into_iter()
            .fold(Manipulator::map(trigger).mandatory(&chord), Manipulator::to)
    };

    Rule::new("Markdown helpers").manipulators([
        // ```
        typed(vec![ToEvent::key(KeyCode::GraveAccentAndTilde); 3], KeyCode::C),
        // __ bold __
        typed(vec![shifted(KeyCode::Hyphen), shifted(KeyCode::Hyphen)], KeyCode::B),
        // _ italic _
        typed(vec![shifted(KeyCode::Hyphen)], KeyCode::I),
        // [] with the cursor inside
        typed(
            vec![
                ToEvent::key(KeyCode::OpenBracket),
                ToEvent::key(KeyCode::CloseBracket),
                ToEvent::key(KeyCode::LeftArrow),
            ],
            KeyCode::L,
        ),
    ])
}

/// Caps lock is Hyper when held and escape when tapped; tab does the same for Meh.
pub fn meh_hyper() -> Rule {
    // Both chords lead with left_shift.
    Rule::new("Meh & Hyper").manipulators([
        Manipulator::map(KeyCode::CapsLock)
            .optional_any()
            .to(ToEvent::key(KeyCode::LeftShift).with_modifiers(&HYPER[1..]))
            .to_if_alone(ToEvent::key(KeyCode::Escape)),
        Manipulator::map(KeyCode::Tab)
            .optional_any()
            .to(ToEvent::key(KeyCode::LeftShift).with_modifiers(&MEH[1..]))
            .to_if_alone(ToEvent::key(KeyCode::Tab)),
    ])
}
