use crate::escape::{escape_latex, excerpt};
use crate::ReportInput;
use jobmatch_core::{Ranking, TOP_K};
use std::fmt::Write;

pub const EXCERPT_CHARS: usize = 400;

/// Minimal LaTeX article builder. Text passed to `text` must already be escaped.
#[derive(Debug, Default)]
pub struct LatexDocument {
    preamble: Vec<String>,
    body: String,
}

impl LatexDocument {
    pub fn article() -> Self {
        let mut doc = Self::default();
        doc.preamble.extend(
            [
                r"\usepackage[T1]{fontenc}",
                r"\usepackage[utf8]{inputenc}",
                r"\usepackage[a4paper,margin=1in]{geometry}",
                r"\usepackage{lmodern}",
                r"\usepackage{hyperref}",
            ]
            .map(String::from),
        );
        doc
    }

    pub fn title(&mut self, title: &str, author: &str) {
        self.preamble.push(format!(r"\title{{{}}}", escape_latex(title)));
        self.preamble.push(format!(r"\author{{{}}}", escape_latex(author)));
        self.body.push_str("\\maketitle\n");
    }

    pub fn section(&mut self, name: &str) {
        let _ = writeln!(self.body, "\n\\section{{{}}}", escape_latex(name));
    }

    pub fn subsection(&mut self, name: &str) {
        let _ = writeln!(self.body, "\n\\subsection{{{}}}", escape_latex(name));
    }

    pub fn text(&mut self, raw: &str) {
        self.body.push_str(raw);
    }

    pub fn plain(&mut self, text: &str) {
        self.body.push_str(&escape_latex(text));
    }

    pub fn bold(&mut self, text: &str) {
        let _ = write!(self.body, r"\textbf{{{}}}", escape_latex(text));
    }

    pub fn italic(&mut self, escaped: &str) {
        let _ = write!(self.body, r"\textit{{{}}}", escaped);
    }

    pub fn newline(&mut self) {
        self.body.push_str("\\\\\n");
    }

    pub fn par(&mut self) {
        self.body.push_str("\n\\par\n");
    }

    pub fn finish(self) -> String {
        let mut out = String::from("\\documentclass{article}\n");
        for line in &self.preamble {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("\\begin{document}\n");
        out.push_str(&self.body);
        out.push_str("\n\\end{document}\n");
        out
    }
}

/// Assemble the full report source.
pub fn build_report(input: &ReportInput<'_>) -> String {
    let city = input.city;
    let mut doc = LatexDocument::article();
    doc.title(
        &format!("Query Analysis Report - {city} vs. Remote Postings"),
        "Linear Algebra Analysis with TF-IDF",
    );

    doc.section("Dataset Description");
    doc.plain("The analysis was performed on a public dataset of job postings.");
    doc.newline();
    doc.bold("File:");
    doc.text(" ");
    doc.plain(input.source_name);
    doc.newline();
    doc.bold("Contents:");
    doc.text(" ");
    doc.plain(&format!(
        "The dataset holds {} postings with a description. For this analysis, the 'documents' are the texts of the '{}' column.",
        input.counts.total, input.document_column
    ));

    doc.section("Analysis Methodology");
    doc.plain(&format!(
        "The goal of this work is to compare how closely two job markets ({city} and Remote) match an ideal job profile defined by the user (the 'query')."
    ));
    doc.par();

    doc.subsection("Query and Documents");
    doc.bold("The Query (Ideal Profile):");
    doc.newline();
    doc.plain("The user supplied the following text describing the ideal profile:");
    doc.newline();
    doc.italic(&escape_latex(input.query.as_str()));
    doc.newline();
    doc.par();
    doc.bold("The Documents (The Groups):");
    doc.newline();
    doc.plain("The postings of the dataset were split into two groups:");
    doc.newline();
    doc.text("- ");
    doc.bold(&format!("Group 1 ({city}):"));
    doc.text(" ");
    doc.plain(&format!("{} documents.", input.counts.local));
    doc.newline();
    doc.text("- ");
    doc.bold("Group 2 (Remote):");
    doc.text(" ");
    doc.plain(&format!("{} documents.", input.counts.remote));
    doc.text("\n");

    doc.subsection("Processing (Linear Algebra)");
    doc.text("1. ");
    doc.bold("TF-IDF:");
    doc.text(" ");
    doc.plain("The query and every document of a group are turned into numeric vectors that weight each keyword by its importance.");
    doc.newline();
    doc.text("2. ");
    doc.bold("Cosine Similarity (Angle Analysis):");
    doc.text(" ");
    doc.plain("The similarity (cosine of the angle) between the query vector and each document vector of the group is computed. An angle of 0");
    doc.text(r"$^\circ$");
    doc.text(" ");
    doc.plain("(cosine = 1) means the posting is identical to the query.");

    doc.section("Comparative Results");
    doc.plain(&format!(
        "The {TOP_K} documents most similar to the query (smallest angle) are listed below for each group."
    ));
    doc.subsection(&format!("Top {TOP_K} - {city} Postings"));
    ranking_block(&mut doc, input.local);
    doc.subsection(&format!("Top {TOP_K} - Remote Postings"));
    ranking_block(&mut doc, input.remote);

    doc.section("Discussion of Results");
    doc.bold("Reading the scores:");
    doc.text(" ");
    doc.plain("A higher similarity, and therefore a smaller angle, means the posting uses the vocabulary of the query with comparable weight. Scores are only comparable inside a group, since each group builds its own vocabulary and IDF weights.");
    doc.par();
    doc.bold("Repeated postings:");
    doc.text(" ");
    doc.plain("Identical similarity and angle values across several ranks usually mean the same description was published more than once.");
    doc.par();
    doc.bold("Noise in the data:");
    doc.text(" ");
    doc.plain("Boilerplate paragraphs, such as company introductions, make postings look alike and can dominate the top of the ranking.");
    doc.par();
    doc.bold("Conclusion:");
    doc.text(" ");
    doc.plain("The method ranks postings by shared terms rather than meaning, so the top matches should be read alongside their full descriptions.");
    doc.par();

    doc.finish()
}

fn ranking_block(doc: &mut LatexDocument, ranking: Option<&Ranking>) {
    let matches = match ranking {
        Some(r) if !r.matches.is_empty() => &r.matches,
        _ => {
            doc.plain("No results were found for this group.");
            doc.text("\n");
            return;
        }
    };
    for (i, m) in matches.iter().enumerate() {
        doc.bold(&format!("Rank {} (CSV row id: {}):", i + 1, m.row_id));
        doc.newline();
        doc.bold("Similarity (S):");
        doc.text(" ");
        doc.plain(&format!("{:.4}", m.similarity));
        doc.text(" | ");
        doc.bold("Angle (degrees):");
        doc.text(" ");
        doc.plain(&format!("{:.2}", m.angle_degrees));
        doc.text(r"$^\circ$");
        doc.newline();
        doc.par();
        doc.bold("Excerpt:");
        doc.newline();
        doc.italic(&excerpt(&m.description, EXCERPT_CHARS));
        doc.par();
    }
}
