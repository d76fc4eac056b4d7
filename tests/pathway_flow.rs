use naavi::{
    parse_pathways, Pathway, PromptBuilder, QuestionSequencer, RngSource, Session, Turn,
};

#[test]
fn answers_flow_into_prompt_and_reply_flows_into_pathways() {
    let sequencer = QuestionSequencer::default();
    let mut session = Session::default();
    let mut rng = RngSource::seeded(2024);

    let answers = [
        "",
        "Second year physics, dean's list twice",
        "Astrophysics research, ideally a PhD",
        "Astronomy club and chess",
        "Khan Academy and arXiv preprints",
    ];

    let mut turns = Vec::new();
    for answer in answers {
        turns.push(sequencer.advance(&mut session, answer, 0.5, &mut rng));
    }

    assert_eq!(turns.last(), Some(&Turn::Complete));
    assert_eq!(
        turns.iter().filter(|t| matches!(t, Turn::Question(_))).count(),
        sequencer.len()
    );
    assert_eq!(session.responses.len(), answers.len() - 1);
    for (stored, raw) in session.responses.iter().zip(&answers[1..]) {
        assert_eq!(stored.split_whitespace().count(), raw.split_whitespace().count());
    }

    let prompt = PromptBuilder::build(&session.responses);
    let mut cursor = 0;
    for stored in &session.responses {
        let at = prompt[cursor..].find(stored.as_str()).expect("response in prompt");
        cursor += at + stored.len();
    }
    assert!(prompt[cursor..].contains("generate three distinct pathways"));

    let reply = "Pathway 1: Research Track\n  Join a lab\n\nPathway 2: Teaching\n  Tutor peers\n";
    assert_eq!(
        parse_pathways(reply),
        vec![
            Pathway {
                title: "Pathway 1: Research Track".into(),
                steps: vec!["Join a lab".into()],
            },
            Pathway {
                title: "Pathway 2: Teaching".into(),
                steps: vec!["Tutor peers".into()],
            },
        ]
    );
}

#[test]
fn pathways_serialize_for_rendering() {
    let pathways = parse_pathways("Pathway 1: X\nstep a\n");
    let json = serde_json::to_string(&pathways).unwrap();
    assert_eq!(json, r#"[{"title":"Pathway 1: X","steps":["step a"]}]"#);
}
