// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity definitions: one entry per educational exercise.
//!
//! Each activity owns exactly one collection. Nothing here relates one
//! activity to another.

use crate::models::schema::{FieldKind, FieldSpec, Literal};

/// Persistence contract for a single activity.
#[derive(Debug, Clone, Copy)]
pub struct ActivityDef {
    /// Path segment under `/api/`
    pub route: &'static str,
    /// Document store collection
    pub collection: &'static str,
    /// Top-level text fields accepted as query filters
    pub identifiers: &'static [&'static str],
    /// Body of the 201 response
    pub success_message: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ActivityDef {
    pub fn is_identifier(&self, name: &str) -> bool {
        self.identifiers.contains(&name)
    }
}

/// Look up an activity by its route segment.
pub fn find(route: &str) -> Option<&'static ActivityDef> {
    CATALOG.iter().find(|a| a.route == route)
}

use FieldKind::{Boolean, Date, Mixed, Number, Object, Records, Text};

// ─── Number-rule guessing (2-4-6 task) ───────────────────────

const GUESS: &[FieldSpec] = &[
    FieldSpec::new("guessNumber", Number),
    FieldSpec::new("guessValue1", Number),
    FieldSpec::new("guessValue2", Number),
    FieldSpec::new("guessValue3", Number),
    FieldSpec::new("matchesRule", Boolean),
    FieldSpec::new("guessHypothesis", Text),
];

const NUMBER_RULE_GUESS: &[FieldSpec] = &[
    FieldSpec::new("guessID", Text),
    FieldSpec::new("sessionID", Text),
    FieldSpec::new("guessList", Records(GUESS)),
    FieldSpec::new("finalGuess", Text),
    FieldSpec::new("actualAnswer", Text),
    FieldSpec::new("isCorrect", Boolean),
];

// ─── Rigor files ─────────────────────────────────────────────

const RIGOR_FILES: &[FieldSpec] = &[
    FieldSpec::new("sessionID", Text),
    FieldSpec::new("userInputs", Mixed),
];

// ─── Hypothesis bot ──────────────────────────────────────────

const HYPOTHESIS_USER: &[FieldSpec] = &[
    FieldSpec::new("userID", Text),
    FieldSpec::new("hypNumber", Number),
    FieldSpec::new("hypDesc", Text),
    FieldSpec::new("q1", Text),
    FieldSpec::new("q2", Text),
    FieldSpec::new("q3", Text),
    FieldSpec::new("hyp1", Text),
    FieldSpec::new("hyp2", Text),
    FieldSpec::new("hyp3", Text),
];

const HYPOTHESIS: &[FieldSpec] = &[
    FieldSpec::new("sessionID", Text),
    FieldSpec::new("grpID", Text),
    FieldSpec::new("users", Records(HYPOTHESIS_USER)),
];

// ─── Favorite-game selection ─────────────────────────────────

const ROUND: &[FieldSpec] = &[
    FieldSpec::new("round", Number),
    FieldSpec::new("choice1", Text),
    FieldSpec::new("choice2", Text),
    FieldSpec::new("isChoice1Selected", Boolean),
    FieldSpec::new("isChoice2Selected", Boolean),
    FieldSpec::new("input", Text),
];

const SUBSESSION: &[FieldSpec] = &[
    FieldSpec::new("subsessionId", Text),
    FieldSpec::new("biasText", Text),
    FieldSpec::new("selectedMatchupBiasText", Mixed),
    FieldSpec::new("rounds", Records(ROUND)),
];

const SELECTION: &[FieldSpec] = &[
    FieldSpec::new("sessionId", Text),
    FieldSpec::new("subsessions", Records(SUBSESSION)),
];

// ─── NMDA simple randomization ───────────────────────────────

const MOVE: &[FieldSpec] = &[
    FieldSpec::new("moveNumber", Number),
    FieldSpec::new("selectedOption", Text),
    FieldSpec::new("selectedTask", Text),
    FieldSpec::new("selectedReason", Text),
    FieldSpec::new("timestamp", Date).with_default(Literal::Now),
];

const MOVE_HISTORY: &[FieldSpec] = &[
    FieldSpec::new("task1", Records(MOVE)),
    FieldSpec::new("task2", Records(MOVE)),
    FieldSpec::new("task3", Records(MOVE)),
];

const TASK_STATE: &[FieldSpec] = &[
    FieldSpec::new("team", Text).with_default(Literal::Text("unassigned")),
    FieldSpec::new("response", Text),
];

const FINAL_STATE: &[FieldSpec] = &[
    FieldSpec::new("task1", Object(TASK_STATE)),
    FieldSpec::new("task2", Object(TASK_STATE)),
    FieldSpec::new("task3", Object(TASK_STATE)),
];

const NMDA_SESSION: &[FieldSpec] = &[
    FieldSpec::new("sessionId", Text),
    FieldSpec::new("moveHistory", Object(MOVE_HISTORY)),
    FieldSpec::new("finalState", Object(FINAL_STATE)),
    FieldSpec::new("timestamp", Date).with_default(Literal::Now),
];

// ─── Randomization lab flowchart ─────────────────────────────

const POSITION: &[FieldSpec] = &[
    FieldSpec::new("x", Number),
    FieldSpec::new("y", Number),
];

const FLOW_NODE: &[FieldSpec] = &[
    FieldSpec::new("label", Text),
    FieldSpec::new("position", Object(POSITION)),
];

const RANDOMIZATION_NODES: &[FieldSpec] = &[
    FieldSpec::new("nodes", Records(FLOW_NODE)),
    FieldSpec::new("submissionID", Text).with_default(Literal::Text("placeholder-submission")),
    FieldSpec::new("sessionID", Text).with_default(Literal::Text("placeholder-session")),
];

// ─── Confounder concern cards ────────────────────────────────

const CONCERN_CARD: &[FieldSpec] = &[
    FieldSpec::new("cardId", Number),
    FieldSpec::new("cardText", Text),
    FieldSpec::new("binAssignment", Text),
    FieldSpec::new("implementationText", Text),
];

const CONCERN_SESSION: &[FieldSpec] = &[
    FieldSpec::new("sessionId", Text),
    FieldSpec::new("sessionType", Text).with_default(Literal::Text("individual")),
    FieldSpec::new("studentId", Text),
    FieldSpec::new("sectionNumber", Number).with_default(Literal::Integer(1)),
    FieldSpec::new("concernResponses", Records(CONCERN_CARD)),
    FieldSpec::new("completedAt", Date),
];

// ─── Randomization literature questions ──────────────────────

const QUESTION: &[FieldSpec] = &[
    FieldSpec::new("sessionId", Text),
    FieldSpec::new("userId", Text),
    FieldSpec::new("questionText", Text),
    FieldSpec::new("selectedSection", Number).with_default(Literal::Integer(1)),
    FieldSpec::new("sessionType", Text).with_default(Literal::Text("group")),
];

// ─── Garden of forking paths ─────────────────────────────────

const GARDEN: &[FieldSpec] = &[
    FieldSpec::new("sessionID", Text),
    FieldSpec::new("coefficient", Number),
    FieldSpec::new("hypothesis", Text),
    FieldSpec::new("yVariables", FieldKind::List(&Text)),
    FieldSpec::new("outcome", Text),
    FieldSpec::new("version", Text).with_default(Literal::Text("1.0")),
];

// ─── Causal level template ───────────────────────────────────

const CAUSAL_RESPONSE: &[FieldSpec] = &[
    FieldSpec::new("selectedAnswer", Text),
    FieldSpec::new("reasoning", Text),
    FieldSpec::new("isCorrect", Boolean),
    FieldSpec::new("question", Mixed),
];

const CAUSAL_LEVEL: &[FieldSpec] = &[
    FieldSpec::new("sessionID", Text),
    FieldSpec::new("type", Text).with_default(Literal::Text("causalLevel")),
    FieldSpec::new("responses", Records(CAUSAL_RESPONSE)),
];

// ─── Flu DAG designer ────────────────────────────────────────

/// `flow` is the serialized diagram the designer exports.
const FLU_DAG: &[FieldSpec] = &[
    FieldSpec::new("flow", Text),
    FieldSpec::new("description", Text),
    FieldSpec::new("groupId", Text),
    FieldSpec::new("userName", Text),
    FieldSpec::new("userId", Text),
];

// ─── Sticky-note drag and drop ───────────────────────────────

const STICKY_NOTE: &[FieldSpec] = &[
    FieldSpec::new("userID", Text),
    FieldSpec::new("sessionID", Text),
    FieldSpec::new("noteScores", Mixed),
];

// ─── FINER research question evaluation ──────────────────────

const FINER_ANSWER: &[FieldSpec] = &[
    FieldSpec::new("userID", Text),
    FieldSpec::new("sessionID", Text),
    FieldSpec::new("questionNumber", Text),
    FieldSpec::new("areaOption", Text),
    FieldSpec::new("evaluation", Mixed),
    FieldSpec::new("elaboration", Text),
];

// ─── Bias mapping ────────────────────────────────────────────

const BIAS_MAP: &[FieldSpec] = &[
    FieldSpec::new("flow", Text),
    FieldSpec::new("sessionID", Text),
    FieldSpec::new("biasNumber", Number),
    FieldSpec::new("submissionInstance", Number),
];

// ─── Audience prompting ──────────────────────────────────────

const STUDENT_INPUT: &[FieldSpec] = &[FieldSpec::new("answerQ1", Text)];

// ─── Mailing list ────────────────────────────────────────────

const EMAIL: &[FieldSpec] = &[FieldSpec::new("email", Text)];

/// Every activity served by this process.
pub static CATALOG: &[ActivityDef] = &[
    ActivityDef {
        route: "numberRuleGuessApi",
        collection: "number_rule_guesses",
        identifiers: &["guessID", "sessionID"],
        success_message: "Answers Submitted",
        fields: NUMBER_RULE_GUESS,
    },
    ActivityDef {
        route: "rigorFilesApi",
        collection: "rigor_files",
        identifiers: &["sessionID"],
        success_message: "Rigor Files Submitted",
        fields: RIGOR_FILES,
    },
    ActivityDef {
        route: "hypothesis",
        collection: "hypotheses",
        identifiers: &["sessionID", "grpID"],
        success_message: "Hypothesis Submitted",
        fields: HYPOTHESIS,
    },
    ActivityDef {
        route: "selection",
        collection: "selections",
        identifiers: &["sessionId"],
        success_message: "Selections Submitted",
        fields: SELECTION,
    },
    ActivityDef {
        route: "nmda-sessions",
        collection: "nmda_sessions",
        identifiers: &["sessionId"],
        success_message: "Session Saved",
        fields: NMDA_SESSION,
    },
    ActivityDef {
        route: "saveFlow",
        collection: "randomization_nodes",
        identifiers: &["submissionID", "sessionID"],
        success_message: "Flowchart saved successfully.",
        fields: RANDOMIZATION_NODES,
    },
    ActivityDef {
        route: "concerns",
        collection: "concern_sessions",
        identifiers: &["sessionId", "studentId"],
        success_message: "Concerns Submitted",
        fields: CONCERN_SESSION,
    },
    ActivityDef {
        route: "questions",
        collection: "question_sessions",
        identifiers: &["sessionId", "userId"],
        success_message: "Question Submitted",
        fields: QUESTION,
    },
    ActivityDef {
        route: "garden",
        collection: "gardens",
        identifiers: &["sessionID"],
        success_message: "Garden Submitted",
        fields: GARDEN,
    },
    ActivityDef {
        route: "submissions",
        collection: "causal_levels",
        identifiers: &["sessionID"],
        success_message: "Submission saved",
        fields: CAUSAL_LEVEL,
    },
    ActivityDef {
        route: "fluDagApi",
        collection: "flu_dags",
        identifiers: &["groupId", "userId"],
        success_message: "DAG Submitted",
        fields: FLU_DAG,
    },
    ActivityDef {
        route: "stickyNoteApi",
        collection: "sticky_notes",
        identifiers: &["userID", "sessionID"],
        success_message: "Notes Submitted",
        fields: STICKY_NOTE,
    },
    ActivityDef {
        route: "finerAnswerApi",
        collection: "finer_answers",
        identifiers: &["userID", "sessionID", "questionNumber"],
        success_message: "Answer Submitted",
        fields: FINER_ANSWER,
    },
    ActivityDef {
        route: "biasMappingApi",
        collection: "bias_maps",
        identifiers: &["sessionID"],
        success_message: "Bias Map Submitted",
        fields: BIAS_MAP,
    },
    ActivityDef {
        route: "studentInput",
        collection: "student_inputs",
        identifiers: &[],
        success_message: "Answer Created",
        fields: STUDENT_INPUT,
    },
    ActivityDef {
        route: "c4rEmailApi",
        collection: "c4r_emails",
        identifiers: &[],
        success_message: "Email Saved",
        fields: EMAIL,
    },
];
