use super::*;

fn valid_form() -> DaoCreateForm {
    DaoCreateForm {
        name: "PMTest".to_owned(),
        symbol: "PMT".to_owned(),
        founders: vec![FounderInput {
            address: "0xf952a72F39c5Fa22a443200AbE7835128bCb7439".to_owned(),
            initial_tokens: "1000".to_owned(),
            email: String::new(),
        }],
        voting_period_hours: "72".to_owned(),
        quorum_percent: "20".to_owned(),
        terms_accepted: true,
    }
}

#[test]
fn steps_advance_in_fixed_order_and_stop_at_the_ends() {
    assert_eq!(StepView::Name.next(), Some(StepView::Founder));
    assert_eq!(StepView::Terms.next(), Some(StepView::Payment));
    assert_eq!(StepView::Payment.next(), None);

    assert_eq!(StepView::Name.back(), None);
    assert_eq!(StepView::Payment.back(), Some(StepView::Terms));
}

#[test]
fn name_step_requires_name_and_bounded_symbol() {
    let mut form = valid_form();
    assert!(step_valid(StepView::Name, &form));

    form.name = "  ".to_owned();
    assert!(!step_valid(StepView::Name, &form));

    form = valid_form();
    form.symbol = String::new();
    assert!(!step_valid(StepView::Name, &form));

    form.symbol = "TOOLONGSYM".to_owned();
    assert!(!step_valid(StepView::Name, &form));
}

#[test]
fn founder_step_requires_valid_rows() {
    let mut form = valid_form();
    assert!(step_valid(StepView::Founder, &form));

    form.founders[0].address = "not-an-address".to_owned();
    assert!(!step_valid(StepView::Founder, &form));

    form = valid_form();
    form.founders[0].initial_tokens = "0".to_owned();
    assert!(!step_valid(StepView::Founder, &form));

    // Email stays optional.
    form = valid_form();
    form.founders[0].email = String::new();
    assert!(step_valid(StepView::Founder, &form));
}

#[test]
fn settings_step_bounds_voting_and_quorum() {
    let mut form = valid_form();
    assert!(step_valid(StepView::Settings, &form));

    form.voting_period_hours = "0".to_owned();
    assert!(!step_valid(StepView::Settings, &form));

    form = valid_form();
    form.quorum_percent = "101".to_owned();
    assert!(!step_valid(StepView::Settings, &form));
}

#[test]
fn terms_step_requires_acceptance() {
    let mut form = valid_form();
    form.terms_accepted = false;
    assert!(!step_valid(StepView::Terms, &form));
    form.terms_accepted = true;
    assert!(step_valid(StepView::Terms, &form));
}

#[test]
fn founders_are_bounded_between_one_and_five() {
    let mut form = valid_form();
    for _ in 0..(MAX_FOUNDERS - 1) {
        assert!(add_founder(&mut form));
    }
    assert_eq!(form.founders.len(), MAX_FOUNDERS);
    assert!(!add_founder(&mut form));

    for index in (1..MAX_FOUNDERS).rev() {
        assert!(remove_founder(&mut form, index));
    }
    assert_eq!(form.founders.len(), 1);
    assert!(!remove_founder(&mut form, 0));

    // Six founders would fail step validation even if forced in.
    form.founders = vec![form.founders[0].clone(); 6];
    assert!(!step_valid(StepView::Founder, &form));
}

#[test]
fn out_of_range_removal_is_refused() {
    let mut form = valid_form();
    assert!(add_founder(&mut form));
    assert!(!remove_founder(&mut form, 9));
    assert_eq!(form.founders.len(), 2);
}
