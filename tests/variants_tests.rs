use homerow::combos::EnumerationMode;
use homerow::config::EngineParams;
use homerow::keycodes::{KeyCode, ModifierKey};
use homerow::keymap::HomeRowKeymap;
use homerow::profile::{ComplexModifications, Rule};
use homerow::rules::HOME_ROW_DESCRIPTION;
use homerow::variants::Variant;
use rstest::rstest;
use std::str::FromStr;

#[rstest]
#[case(Variant::Compiled, EnumerationMode::Permutations, 3, 400)]
#[case(Variant::Extended, EnumerationMode::Mixed, 8, 283)]
fn test_variant_policies(
    #[case] variant: Variant,
    #[case] mode: EnumerationMode,
    #[case] max: usize,
    #[case] home_row_rules: usize,
) {
    assert_eq!(variant.mode(), mode);
    assert_eq!(variant.max_size(variant.keymap().len()), max);

    let rules = variant.rules().unwrap();
    assert_eq!(rules.len(), 4);
    let home_row = rules
        .iter()
        .find(|r| r.description == HOME_ROW_DESCRIPTION)
        .unwrap();
    assert_eq!(home_row.manipulators.len(), home_row_rules);
}

#[rstest]
#[case(Variant::Compiled, &["Home row mods", "Shift + backspace = delete", "Home, end", "Home, end, terminal"])]
#[case(Variant::Extended, &["Control + hjkl = arrows", "Markdown helpers", "Home row mods", "Meh & Hyper"])]
fn test_variant_rule_order(#[case] variant: Variant, #[case] expected: &[&str]) {
    let names: Vec<String> = variant
        .rules()
        .unwrap()
        .into_iter()
        .map(|r| r.description)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_compiled_bound_follows_small_keymaps() {
    assert_eq!(Variant::Compiled.max_size(2), 2);
    assert_eq!(Variant::Extended.max_size(2), 2);
}

#[test]
fn test_build_carries_parameters() {
    let doc = Variant::Compiled.build(&EngineParams::default()).unwrap();
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(
        value["parameters"]["basic.to_if_held_down_threshold_milliseconds"],
        250
    );
    assert_eq!(value["parameters"]["basic.simultaneous_threshold_milliseconds"], 50);

    let back: ComplexModifications = serde_json::from_value(value).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_build_rejects_inverted_thresholds() {
    let params = EngineParams {
        simultaneous_threshold_ms: 300,
        ..Default::default()
    };
    assert!(Variant::Extended.build(&params).is_err());
}

#[test]
fn test_build_with_custom_keymap() {
    let keymap = HomeRowKeymap::from_pairs(&[
        (KeyCode::F, ModifierKey::LeftShift),
        (KeyCode::J, ModifierKey::RightShift),
    ])
    .unwrap();
    let doc = Variant::Extended
        .build_with_keymap(keymap, &EngineParams::default())
        .unwrap();
    // j triggers an arrow, so the arrow rule leads; markdown keys are free.
    let names: Vec<&str> = doc.rules.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(
        names,
        ["Control + hjkl = arrows", "Home row mods", "Markdown helpers", "Meh & Hyper"]
    );
    // f+j, j+f, f, j
    assert_eq!(doc.rules[1].manipulators.len(), 4);
}

fn any_modifier_keys(rule: &Rule) -> Vec<KeyCode> {
    // App conditions split a key between rules, so only unconditional ones count.
    rule.manipulators
        .iter()
        .filter(|m| m.conditions.is_empty())
        .filter(|m| {
            m.from
                .modifiers
                .as_ref()
                .is_some_and(|f| f.optional.contains(&ModifierKey::Any))
        })
        .filter_map(|m| m.from.key_code)
        .collect()
}

#[rstest]
#[case(Variant::Compiled)]
#[case(Variant::Extended)]
fn test_no_rule_is_hidden_by_an_earlier_home_row_key(#[case] variant: Variant) {
    let rules = variant.rules().unwrap();
    for (i, rule) in rules.iter().enumerate() {
        for earlier in &rules[..i] {
            let grabbed = any_modifier_keys(earlier);
            for key in rule.trigger_keys() {
                assert!(
                    !grabbed.contains(&key),
                    "'{}' on {} is caught first by '{}'",
                    rule.description,
                    key,
                    earlier.description
                );
            }
        }
    }
}

#[test]
fn test_extended_arrows_and_link_come_before_home_row() {
    let rules = Variant::Extended.rules().unwrap();
    let position = |name: &str| rules.iter().position(|r| r.description == name).unwrap();
    let home_row = position(HOME_ROW_DESCRIPTION);

    assert!(position("Control + hjkl = arrows") < home_row);
    assert!(position("Markdown helpers") < home_row);
    assert!(position("Meh & Hyper") > home_row);
    assert!(any_modifier_keys(&rules[home_row]).contains(&KeyCode::L));
}

#[test]
fn test_variant_names_round_trip() {
    assert_eq!(Variant::from_str("extended").unwrap(), Variant::Extended);
    assert_eq!(Variant::Compiled.to_string(), "compiled");
    assert_eq!(Variant::Compiled.default_profile_name(), "Compiled");
}
