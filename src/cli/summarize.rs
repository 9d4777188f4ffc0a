use anyhow::Result;
use std::path::Path;

use sintesis::processing::frequency::TermFrequencyMap;
use sintesis::processing::phrases::SaliencePhraseSet;
use sintesis::processing::splitter::split_sentences;
use sintesis::{Summary, Synthesizer};

/// `summarize` — print the synthesis, the JSON summary, or the score table.
pub fn run(
    text: Option<&str>,
    file: Option<&Path>,
    json: bool,
    explain: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let input = super::read_input(text, file)?;
    let synth = Synthesizer::with_config(super::load_config(config_path)?);

    if !json && !explain {
        println!("{}", synth.summarize(&input));
        return Ok(());
    }

    let summary = match synth.try_summarize(&input) {
        Ok(s) => s,
        Err(e) => match e.user_message() {
            // Input conditions still produce their caller-visible message.
            Some(_) => {
                println!("{}", synth.summarize(&input));
                return Ok(());
            }
            None => return Err(e.into()),
        },
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_explanation(&synth, &input, &summary);
    }
    Ok(())
}

/// Number of top-weighted terms listed by `--explain`.
const EXPLAIN_TOP_TERMS: usize = 8;

fn print_explanation(synth: &Synthesizer, input: &str, summary: &Summary) {
    println!("{}\n", summary.text);
    println!(
        "sentences: {}  target: {}  selected: {:?}\n",
        summary.sentence_count, summary.target_count, summary.selected
    );

    if summary.scores.is_empty() {
        println!("(passthrough: no scoring)");
        return;
    }

    let text = input.trim();
    let phrases = SaliencePhraseSet::detect(text);
    if phrases.is_empty() {
        println!("phrases: (none)");
    } else {
        println!("phrases ({}): {}", phrases.len(), phrases.sorted().join(", "));
    }

    let frequencies = TermFrequencyMap::build(text, synth.config().min_word_length);
    if !frequencies.is_empty() {
        let mut terms: Vec<(&str, f64)> = frequencies.iter().collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(b.0)));
        let top: Vec<String> = terms
            .iter()
            .take(EXPLAIN_TOP_TERMS)
            .map(|(w, f)| format!("{}={:.2}", w, f))
            .collect();
        println!("terms ({}): {}\n", frequencies.len(), top.join(", "));
    }

    let sentences = split_sentences(input).unwrap_or_default();
    println!(
        "{:>3} {:>1} {:>7}  {:>6} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}  {}",
        "#", "", "SCORE", "TF", "POS", "LEN", "PHR", "IND", "NUM", "RED", "SENTENCE"
    );
    println!("{}", "-".repeat(90));

    for s in &summary.scores {
        let b = &s.breakdown;
        let mark = if summary.selected.contains(&s.index) { "*" } else { "" };
        let text = sentences
            .get(s.index)
            .map(|x| x.text.chars().take(40).collect::<String>())
            .unwrap_or_default();
        println!(
            "{:>3} {:>1} {:>7.3}  {:>6.3} {:>5.2} {:>5.2} {:>5.2} {:>5.2} {:>5.2} {:>5.2}  {}",
            s.index, mark, s.score, b.term_frequency, b.position, b.length, b.phrases,
            b.indicators, b.numeric, b.redundancy, text
        );
    }
}
