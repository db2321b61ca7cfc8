//! Full report assembly.
//!
//! The report is plain text in ordered sections. It holds no maps and
//! reads no clock, so identical inputs serialize to identical bytes.

use chrono::Datelike;
use ganzhi_base::sexagenary::{month_branch, month_stem};
use ganzhi_base::{
    ALL_FAMILIES, ALL_POSITIONS, EarthlyBranch, Element, ElementBalance, FavorableElements,
    FourPillars, HeavenlyStem, LuckPillar, LuckTimeline, PillarPosition, StrengthAssessment,
    StrengthClass, TenGod, TenGodAssignment, branch_harmony, branches_clash, chart_relations,
    hidden_element_counts, year_pillar,
};
use serde::{Deserialize, Serialize};

use crate::composer::InterpretationAnswer;
use crate::rules::{REINFORCE_ACTIONS, RESTRAIN_ACTIONS, element_slot};

/// Presentation hints supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayMeta {
    /// Name used in the summary; "This chart" when absent.
    pub subject: Option<String>,
    /// Append Chinese characters after pillar names.
    pub show_hanzi: bool,
}

/// Everything a report is built from.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub pillars: &'a FourPillars,
    pub balance: &'a ElementBalance,
    pub ten_gods: &'a TenGodAssignment,
    pub strength: &'a StrengthAssessment,
    pub favorable: &'a FavorableElements,
    pub timeline: &'a LuckTimeline,
    pub answers: &'a [InterpretationAnswer],
    /// Sexagenary year in effect on the timeline's as-of date.
    pub as_of_year: i32,
    pub display: &'a DisplayMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Report {
    pub summary: String,
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

pub const PILLARS_TITLE: &str = "Four pillars";
pub const ELEMENTS_TITLE: &str = "Five elements";
pub const TEN_GODS_TITLE: &str = "Ten gods";
pub const FAVORABLE_TITLE: &str = "Favorable elements";
pub const LUCK_TITLE: &str = "Luck cycle";
pub const MONTHS_TITLE: &str = "Month by month";
pub const YEARS_TITLE: &str = "Ten-year outlook";
pub const CHECKLIST_TITLE: &str = "Action checklist";

/// Number of forward years in the outlook section.
pub const OUTLOOK_YEARS: i32 = 10;

pub fn assemble_report(inputs: &ReportInputs<'_>) -> Report {
    let mut sections = vec![
        section(PILLARS_TITLE, pillar_lines(inputs)),
        section(ELEMENTS_TITLE, element_lines(inputs)),
        section(TEN_GODS_TITLE, ten_god_lines(inputs.ten_gods)),
        section(FAVORABLE_TITLE, favorable_lines(inputs)),
        section(LUCK_TITLE, luck_lines(inputs)),
        section(MONTHS_TITLE, month_lines(inputs)),
        section(YEARS_TITLE, year_lines(inputs)),
    ];
    for answer in inputs.answers {
        sections.push(answer_section(answer));
    }
    sections.push(section(CHECKLIST_TITLE, checklist(inputs.answers)));
    Report {
        summary: summary(inputs),
        sections,
    }
}

fn section(title: &str, lines: Vec<String>) -> ReportSection {
    ReportSection {
        title: title.to_string(),
        body: lines.join("\n"),
    }
}

fn pair_name(stem: HeavenlyStem, branch: EarthlyBranch, hanzi: bool) -> String {
    if hanzi {
        format!("{stem}-{branch} {}{}", stem.hanzi(), branch.hanzi())
    } else {
        format!("{stem}-{branch}")
    }
}

fn affinity(favorable: &FavorableElements, element: Element) -> &'static str {
    if favorable.reinforce.contains(&element) {
        "supportive"
    } else if favorable.restrain.contains(&element) {
        "challenging"
    } else {
        "neutral"
    }
}

fn summary(inputs: &ReportInputs<'_>) -> String {
    let subject = inputs.display.subject.as_deref().unwrap_or("This chart");
    let dm = inputs.pillars.day_master();
    let polarity = match dm.polarity() {
        ganzhi_base::Polarity::Yang => "yang",
        ganzhi_base::Polarity::Yin => "yin",
    };
    let class = match inputs.strength.class {
        StrengthClass::Strong => "strong",
        StrengthClass::Weak => "weak",
    };
    let favorable = if inputs.favorable.reinforce.is_empty() {
        "none".to_string()
    } else {
        inputs
            .favorable
            .reinforce
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(" and ")
    };
    let current = inputs.timeline.current();
    let shape = if inputs.balance.is_balanced() {
        format!(
            "The elements are close to even (balance score {}/100).",
            inputs.balance.score
        )
    } else {
        format!(
            "The chart leans {} and is short on {} (balance score {}/100).",
            inputs.balance.dominant, inputs.balance.weakest, inputs.balance.score
        )
    };
    format!(
        "{subject} has a {polarity} {} Day Master ({dm}), born in a {} year. {shape} \
         The Day Master reads {class}, so {favorable} are favorable. \
         At age {} the {} decade of {}-{} is running (ages {}-{}).",
        dm.element(),
        inputs.pillars.year,
        inputs.timeline.current_age,
        current.theme,
        current.stem,
        current.branch,
        current.age_start,
        current.age_end
    )
}

fn pillar_lines(inputs: &ReportInputs<'_>) -> Vec<String> {
    let p = inputs.pillars;
    let t = inputs.ten_gods;
    ALL_POSITIONS
        .iter()
        .map(|&pos| {
            let pillar = p.get(pos);
            let (stem_label, branch_label) = match pos {
                PillarPosition::Year => (t.year.name(), t.branches.year.name()),
                PillarPosition::Month => (t.month.name(), t.branches.month.name()),
                PillarPosition::Day => ("day master", t.branches.day.name()),
                PillarPosition::Hour => (t.hour.name(), t.branches.hour.name()),
            };
            let hidden = pillar
                .branch()
                .hidden_stems()
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                "{:<5} {}: {}/{}, stem {stem_label}, branch {branch_label}, hidden {hidden}",
                pos.name(),
                pair_name(pillar.stem(), pillar.branch(), inputs.display.show_hanzi),
                pillar.stem().element(),
                pillar.branch().element()
            )
        })
        .collect()
}

fn element_lines(inputs: &ReportInputs<'_>) -> Vec<String> {
    let b = inputs.balance;
    let c = b.counts;
    let h = hidden_element_counts(inputs.pillars);
    let mut lines = vec![
        format!(
            "wood {}, fire {}, earth {}, metal {}, water {} (of {})",
            c.wood, c.fire, c.earth, c.metal, c.water, b.total
        ),
        format!(
            "dominant {}, weakest {}, balance score {}/100{}",
            b.dominant,
            b.weakest,
            b.score,
            if b.is_balanced() { ", balanced" } else { "" }
        ),
        format!(
            "hidden stems: wood {}, fire {}, earth {}, metal {}, water {}",
            h.wood, h.fire, h.earth, h.metal, h.water
        ),
    ];
    let relations = chart_relations(inputs.pillars);
    if relations.is_empty() {
        lines.push("no stem combinations, branch harmonies or clashes".to_string());
    } else {
        lines.extend(relations.iter().map(|r| r.to_string()));
    }
    lines
}

fn ten_god_lines(t: &TenGodAssignment) -> Vec<String> {
    ALL_FAMILIES
        .iter()
        .map(|&f| {
            let strength = match t.family_strength(f) {
                ganzhi_base::FamilyStrength::Absent => "absent",
                ganzhi_base::FamilyStrength::Present => "present",
                ganzhi_base::FamilyStrength::Prominent => "prominent",
            };
            format!("{f}: {} ({strength})", t.family_count(f))
        })
        .collect()
}

fn favorable_lines(inputs: &ReportInputs<'_>) -> Vec<String> {
    let s = inputs.strength;
    let f = inputs.favorable;
    let dm = s.day_master;
    let class = match s.class {
        StrengthClass::Strong => "strong",
        StrengthClass::Weak => "weak",
    };
    let list = |v: &[Element]| {
        if v.is_empty() {
            "none".to_string()
        } else {
            v.iter().map(|e| e.name()).collect::<Vec<_>>().join(", ")
        }
    };
    let mut lines = vec![
        format!(
            "Day Master {dm} ({}) is {class}: support {} of {}",
            dm.element(),
            s.support,
            s.total
        ),
        format!("reinforce: {}", list(&f.reinforce)),
        format!("restrain: {}", list(&f.restrain)),
    ];
    lines.extend(
        f.reinforce
            .iter()
            .map(|&e| REINFORCE_ACTIONS[element_slot(e)].to_string()),
    );
    lines.extend(
        f.restrain
            .iter()
            .map(|&e| RESTRAIN_ACTIONS[element_slot(e)].to_string()),
    );
    lines
}

fn window_line(label: &str, w: &LuckPillar) -> String {
    format!(
        "{label}: ages {}-{}, {}-{} ({}), {}: {}",
        w.age_start,
        w.age_end,
        w.stem,
        w.branch,
        w.element,
        w.theme,
        w.theme.description()
    )
}

fn luck_lines(inputs: &ReportInputs<'_>) -> Vec<String> {
    let t = inputs.timeline;
    let age = t.current_age;
    let current = t.current();
    let next = t.window(t.window_index(age) + 1);
    let day_branch = inputs.pillars.day.branch();
    let mut lines = vec![
        format!(
            "direction {:?}, first decade pillar at age {}",
            t.direction, t.start_age
        )
        .to_lowercase(),
        window_line("current", &current),
        window_line("next", &next),
        format!(
            "transition at age {} in {}",
            next.age_start,
            i64::from(t.birth_date.year()) + i64::from(next.age_start)
        ),
    ];
    if branches_clash(current.branch, day_branch) {
        lines.push("the current luck branch clashes with the day branch".to_string());
    } else if let Some(e) = branch_harmony(current.branch, day_branch) {
        lines.push(format!(
            "the current luck branch harmonises with the day branch as {e}"
        ));
    }
    lines.push("timeline:".to_string());
    lines.extend(t.windows.iter().map(|w| format!("  {w}")));
    lines
}

fn month_lines(inputs: &ReportInputs<'_>) -> Vec<String> {
    let year = year_pillar(inputs.as_of_year);
    let dm = inputs.pillars.day_master();
    let day_branch = inputs.pillars.day.branch();
    let mut lines = vec![format!(
        "sexagenary year {} ({})",
        inputs.as_of_year,
        pair_name(year.stem(), year.branch(), inputs.display.show_hanzi)
    )];
    for m in 1..=12u8 {
        let stem = month_stem(year.stem(), m);
        let branch = month_branch(m);
        let mut line = format!(
            "month {m:>2} {}: {}, {}, {}",
            pair_name(stem, branch, inputs.display.show_hanzi),
            stem.element(),
            TenGod::of_stem(dm, stem),
            affinity(inputs.favorable, stem.element())
        );
        if branches_clash(branch, day_branch) {
            line.push_str(", clashes with the day branch");
        }
        lines.push(line);
    }
    lines
}

fn year_lines(inputs: &ReportInputs<'_>) -> Vec<String> {
    let t = inputs.timeline;
    let dm = inputs.pillars.day_master();
    let day_branch = inputs.pillars.day.branch();
    let birth_year = t.birth_date.year();
    (0..OUTLOOK_YEARS)
        .map(|i| {
            let y = inputs.as_of_year + i;
            let p = year_pillar(y);
            let age = y - birth_year;
            let luck = match u32::try_from(age) {
                Ok(a) => {
                    let w = t.window(t.window_index(a));
                    format!("luck {}-{} {}", w.stem, w.branch, w.theme)
                }
                Err(_) => "before birth year".to_string(),
            };
            let mut line = format!(
                "{y} {} (age {age}): {}, {}, {}, {luck}",
                pair_name(p.stem(), p.branch(), inputs.display.show_hanzi),
                p.element(),
                TenGod::of_stem(dm, p.stem()),
                affinity(inputs.favorable, p.element())
            );
            if branches_clash(p.branch(), day_branch) {
                line.push_str(", clashes with the day branch");
            }
            line
        })
        .collect()
}

fn answer_section(answer: &InterpretationAnswer) -> ReportSection {
    let mut lines = vec![answer.one_liner.clone(), answer.rationale.clone()];
    lines.extend(answer.action_items.iter().map(|a| format!("- {a}")));
    section(answer.topic.title(), lines)
}

fn checklist(answers: &[InterpretationAnswer]) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    for item in answers.iter().flat_map(|a| a.action_items.iter()) {
        if !seen.contains(&item.as_str()) {
            seen.push(item.as_str());
        }
    }
    seen.into_iter().map(|s| format!("- {s}")).collect()
}
