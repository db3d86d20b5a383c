use std::panic;

use tabml_core::{CompileOptions, LineTag, normalize, parse, render};

const CASES: usize = 200;
const MAX_LEN: usize = 512;
const CHARSET: &[char] = &[
    'a', 'b', 'd', 'i', 'l', 'p', 'u', 'v', 'x', 'L', 'Z', '0', '7', ' ', ' ', ' ', '\n', '\n',
    '\t', '\t', '\r', '#', '.', '(', ')', ':', '-', '_', '/', '"', '<', 'é', '\u{3042}',
];

const TAGS: &[&str] = &["div", "p", "span", "ul", "li", "section", "em", "my-card"];
const CLASSES: &[&str] = &["a", "b", "wide", "x-1"];
const WORDS: &[&str] = &["alpha", "beta", "gamma", "delta"];
const TEXT_WORDS: &[&str] = &["Lorem", "Ipsum", "Dolor"];

#[test]
fn pipeline_never_panics_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x7f4a_2d91_13b4_55a1);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let result = panic::catch_unwind(|| {
            let _ = render(&source, &CompileOptions::default());
            let _ = render(
                &source,
                &CompileOptions {
                    strict_depth: true,
                    ..Default::default()
                },
            );
        });
        if result.is_err() {
            return Err(format!("render panicked for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

#[test]
fn normalize_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x91d4_2f8e_c1a3_044f);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, len);
        let once = normalize(&source);
        let twice = normalize(&once);
        if once != twice {
            return Err(format!(
                "normalize not idempotent for case {}: {:?}\nonce: {:?}\ntwice: {:?}",
                case, source, once, twice
            )
            .into());
        }
    }
    Ok(())
}

#[test]
fn output_is_well_formed() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x3c6e_f372_fe94_f82b);
    for case in 0..CASES {
        let doc = random_document(&mut rng);
        let source = doc.with_tabs();
        let html = render(&source, &CompileOptions::default())?.html;
        let wrapped = format!("<root>\n{}</root>", html);
        if let Err(err) = roxmltree::Document::parse(&wrapped) {
            return Err(format!(
                "malformed output for case {}: {}\nSource:\n---\n{}\n---\nHTML:\n{}",
                case, err, source, html
            )
            .into());
        }
    }
    Ok(())
}

#[test]
fn element_depth_matches_level() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0xa54f_f53a_5f1d_36f1);
    for case in 0..CASES {
        let doc = random_document(&mut rng);
        let source = doc.with_tabs();
        let html = render(&source, &CompileOptions::default())?.html;
        let wrapped = format!("<root>{}</root>", html);
        let xml = roxmltree::Document::parse(&wrapped)?;

        for line in parse(&normalize(&source)).lines {
            if line.tag == LineTag::Text {
                continue;
            }
            let Some(id) = line.attrs.get("id") else {
                continue;
            };
            let node = xml
                .descendants()
                .find(|node| node.attribute("id") == Some(id))
                .ok_or_else(|| format!("case {}: element #{} missing from output", case, id))?;
            // Ancestors include the element itself, the wrapper and the document root.
            let depth = node.ancestors().count() - 3;
            if depth != line.level {
                return Err(format!(
                    "case {}: #{} at level {} is nested {} deep\n{}",
                    case, id, line.level, depth, source
                )
                .into());
            }
        }
    }
    Ok(())
}

#[test]
fn space_and_tab_documents_compile_alike() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x510e_527f_ade6_82d1);
    for case in 0..CASES {
        let doc = random_document(&mut rng);
        let width = rng.gen_range(1, 5);
        let tabs = render(&doc.with_tabs(), &CompileOptions::default())?;
        let spaces = render(&doc.with_spaces(width, &mut rng), &CompileOptions::default())?;
        if tabs != spaces {
            return Err(format!(
                "case {}: width {} differs\n{}\n---\n{}",
                case, width, tabs.html, spaces.html
            )
            .into());
        }
    }
    Ok(())
}

/// A template as `(level, content)` pairs that form a valid indentation tree.
struct RandomDoc {
    lines: Vec<(usize, String)>,
}

impl RandomDoc {
    fn with_tabs(&self) -> String {
        let mut out = String::new();
        for (level, content) in &self.lines {
            out.push_str(&"\t".repeat(*level));
            out.push_str(content);
            out.push('\n');
        }
        out
    }

    fn with_spaces(&self, width: usize, rng: &mut Lcg) -> String {
        let mut out = String::new();
        for (level, content) in &self.lines {
            if rng.gen_range(0, 6) == 0 {
                out.push_str(&" ".repeat(rng.gen_range(0, 4)));
                out.push('\n');
            }
            out.push_str(&" ".repeat(level * width));
            out.push_str(content);
            out.push('\n');
        }
        out
    }
}

fn random_document(rng: &mut Lcg) -> RandomDoc {
    let count = rng.gen_range(1, 30);
    let mut lines = Vec::with_capacity(count);
    let mut next_id = 0;
    // Deepest level the next line may use.
    let mut max_level = 0;

    for _ in 0..count {
        let level = rng.gen_range(0, max_level + 1);
        match rng.gen_range(0, 6) {
            0 => {
                let text = random_words(rng, TEXT_WORDS, 1, 4);
                lines.push((level, text));
                max_level = level;
            }
            1 => {
                let parent = random_element(rng, &mut next_id);
                let child = random_element(rng, &mut next_id);
                lines.push((level, format!("{}: {}", parent, child)));
                // The first indented line must stay one level deep for width inference.
                max_level = level + 1;
            }
            _ => {
                let element = random_element(rng, &mut next_id);
                lines.push((level, element));
                max_level = level + 1;
            }
        }
    }
    RandomDoc { lines }
}

fn random_element(rng: &mut Lcg, next_id: &mut usize) -> String {
    let mut out = TAGS[rng.gen_range(0, TAGS.len())].to_string();
    out.push_str(&format!("#n{}", next_id));
    *next_id += 1;
    for _ in 0..rng.gen_range(0, 3) {
        out.push('.');
        out.push_str(CLASSES[rng.gen_range(0, CLASSES.len())]);
    }
    if rng.gen_range(0, 3) == 0 {
        out.push_str(&format!(
            "(data-k:{} title:{})",
            rng.gen_range(0, 100),
            WORDS[rng.gen_range(0, WORDS.len())]
        ));
    }
    if rng.gen_range(0, 2) == 0 {
        out.push(' ');
        out.push_str(&random_words(rng, WORDS, 1, 4));
    }
    out
}

fn random_words(rng: &mut Lcg, words: &[&str], min: usize, max: usize) -> String {
    let count = rng.gen_range(min, max);
    (0..count)
        .map(|_| words[rng.gen_range(0, words.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn random_string(rng: &mut Lcg, len: usize) -> String {
    (0..len)
        .map(|_| CHARSET[rng.gen_range(0, CHARSET.len())])
        .collect()
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = max - min;
        let value = (self.next() >> 1) as usize;
        min + (value % span)
    }
}
