use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use fizzbuzz::{FizzBuzz, Report, Rule};
use std::sync::Arc;

#[derive(Clone, Copy)]
enum RuleKind {
    Override,
    Core,
}

impl RuleKind {
    fn name(&self) -> &'static str {
        match self {
            RuleKind::Override => "override",
            RuleKind::Core => "core",
        }
    }
}

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Output framed by the game banner
    pub fn format_output(&self, fizzbuzz: &FizzBuzz) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("FizzBuzz:\n");
        output.push_str("---------\n");
        output.push('\n');
        output.push_str(fizzbuzz.output());
        output.push('\n');
        output.push('\n');
        output
    }

    pub fn format_report(&self, report: &Report) -> serde_json::Result<String> {
        serde_json::to_string_pretty(report)
    }

    pub fn format_rules(&self, fizzbuzz: &FizzBuzz) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("Kind").set_alignment(CellAlignment::Left),
            Cell::new("Label").set_alignment(CellAlignment::Left),
            Cell::new("Matches").set_alignment(CellAlignment::Left),
        ]));

        let rules = self
            .rule_rows(RuleKind::Override, fizzbuzz.override_rules())
            .chain(self.rule_rows(RuleKind::Core, fizzbuzz.core_rules()));

        for (precedence, (kind, rule)) in rules.enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(precedence + 1).set_alignment(CellAlignment::Right),
                Cell::new(kind.name()),
                Cell::new(rule.label()),
                Cell::new(rule.description()),
            ]));
        }

        let mut output = table.to_string();
        output.push('\n');
        output
    }

    fn rule_rows<'a>(
        &self,
        kind: RuleKind,
        rules: &'a [Arc<dyn Rule>],
    ) -> impl Iterator<Item = (RuleKind, &'a Arc<dyn Rule>)> + 'a {
        rules.iter().map(move |rule| (kind, rule))
    }
}
