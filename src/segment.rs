//! Segments: the renderable units of a task.
//!
//! A task body is a list of segment dictionaries discriminated by `type`:
//!   - `text`   plain text block
//!   - `source` source snippet (same data as text, different template)
//!   - `input`  fill-in question: description cells + pre-filled answer + solution
//!   - `check`  checkbox question: option cells + solution
//!
//! Every segment carries a `context`, the view-model handed to the renderer.
//! Question segments additionally carry their accepted solutions and, once an
//! answer was submitted, whether it was correct.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Map, Value as Json};
use tracing::{debug, instrument};

use crate::container::{DictContainer, Value};
use crate::error::{Error, Result};

/// Printed solution when the submitted answer was right.
pub const RIGHT_SOLUTION_TEXT: &str = "OK";
/// Printed solution when the first accepted solution is the empty string.
pub const EMPTY_SOLUTION_TEXT: &str = "<empty string>";

pub const CSS_RIGHT: &str = "sol_right";
pub const CSS_WRONG: &str = "sol_wrong";

const CBOX_ID: &str = "123";

/// Submitted answers keyed by segment index.
pub type Submission = HashMap<usize, String>;

/// The `type` discriminator of a segment dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentType {
  Text,
  Source,
  Input,
  Check,
  /// Radio lists are reserved but not implemented.
  Radio,
}

impl SegmentType {
  pub fn from_typestr(s: &str) -> Result<Self> {
    match s {
      "text" => Ok(SegmentType::Text),
      "source" => Ok(SegmentType::Source),
      "input" => Ok(SegmentType::Input),
      "check" => Ok(SegmentType::Check),
      "radio" => Ok(SegmentType::Radio),
      other => Err(Error::UnknownType(other.to_string())),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      SegmentType::Text => "text",
      SegmentType::Source => "source",
      SegmentType::Input => "input",
      SegmentType::Check => "check",
      SegmentType::Radio => "radio",
    }
  }
}

/// Numbers question segments for display. One counter per task parse.
#[derive(Debug, Default)]
pub struct QuestionCounter {
  issued: u32,
}

impl QuestionCounter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn next(&mut self) -> u32 {
    self.issued += 1;
    self.issued
  }

  pub fn issued(&self) -> u32 {
    self.issued
  }
}

/// Renderable key-value view-model of one segment.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context(Map<String, Json>);

impl Context {
  pub fn get(&self, key: &str) -> Option<&Json> {
    self.0.get(key)
  }

  #[allow(dead_code)]
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.0.keys().map(String::as_str)
  }

  fn insert(&mut self, key: &str, value: Json) {
    self.0.insert(key.to_string(), value);
  }
}

/// One accepted answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolutionContainer {
  content: String,
}

impl SolutionContainer {
  pub fn new(content: impl Into<String>) -> Self {
    Self { content: content.into() }
  }

  pub fn content(&self) -> &str {
    &self.content
  }

  fn from_value(value: &Value, owner: &str) -> Result<Self> {
    match value {
      Value::Dict(dc) => {
        let content = dc.attr("content")?;
        content
          .scalar_text()
          .map(Self::new)
          .ok_or_else(|| Error::wrong_type(dc.name(), "content", "a scalar"))
      }
      Value::List(_) => Err(Error::wrong_type(owner, "solution", "an object or a scalar")),
      scalar => Ok(Self::new(scalar.scalar_text().unwrap_or_default())),
    }
  }
}

/// Bring a raw `solution` field into a uniform non-empty list of containers.
///
/// Accepted shapes: a single object with `content`, a scalar, or a list of either.
pub fn unified_solution_structure(raw: &Value, owner: &str) -> Result<Vec<SolutionContainer>> {
  let items: Vec<&Value> = match raw {
    Value::List(items) => items.iter().collect(),
    single => vec![single],
  };
  if items.is_empty() {
    return Err(Error::EmptySolution);
  }
  items.into_iter().map(|item| SolutionContainer::from_value(item, owner)).collect()
}

/// Line-ending normalisation of a submitted answer. Nothing else is touched.
pub fn preprocess_user_solution(raw: &str) -> String {
  raw.replace('\r', "")
}

/// Question state shared by input fields and checkboxes.
#[derive(Clone, Debug)]
pub struct Question {
  counter: u32,
  solution: Vec<SolutionContainer>,
  user_was_correct: Option<bool>,
}

impl Question {
  fn new(dc: &DictContainer, counter: &mut QuestionCounter) -> Result<Self> {
    let counter = counter.next();
    let solution = unified_solution_structure(dc.attr("solution")?, dc.name())?;
    Ok(Self { counter, solution, user_was_correct: None })
  }

  pub fn test_user_was_correct(&self, user_solution: &str) -> bool {
    self.solution.iter().any(|s| s.content == user_solution)
  }

  /// Text shown next to a wrong answer. Only the first alternative is shown.
  fn printed_solution(&self) -> &str {
    match self.solution.first().map(SolutionContainer::content) {
      Some("") | None => EMPTY_SOLUTION_TEXT,
      Some(first) => first,
    }
  }
}

#[derive(Clone, Debug)]
pub enum Kind {
  Text,
  Src,
  InputField(Question),
  CBox(Question),
}

#[derive(Clone, Debug)]
pub struct Segment {
  kind: Kind,
  idx: Option<usize>,
  context: Context,
}

impl Segment {
  /// Text block: `content` must be a string.
  pub fn text(dc: &DictContainer) -> Result<Self> {
    Self::text_like(dc, Kind::Text)
  }

  /// Source block, same data as `text`.
  pub fn src(dc: &DictContainer) -> Result<Self> {
    Self::text_like(dc, Kind::Src)
  }

  fn text_like(dc: &DictContainer, kind: Kind) -> Result<Self> {
    let text = dc.str_attr("content")?;
    let mut context = Context::default();
    context.insert("text", json!(text));
    context.insert("multiline", json!(text.contains('\n')));
    let comment = match dc.get("comment") {
      Some(v) => serde_json::to_value(v)?,
      None => json!(false),
    };
    context.insert("comment", comment);
    Ok(Self { kind, idx: None, context })
  }

  /// Fill-in question: `content` is a list of description cells, `answer.content`
  /// is the pre-filled text.
  pub fn input_field(dc: &DictContainer, counter: &mut QuestionCounter) -> Result<Self> {
    let text_slots = description_cells(dc)?;
    let prefilled = dc.dict_attr("answer")?.str_attr("content")?;

    let question = Question::new(dc, counter)?;

    let mut context = Context::default();
    context.insert("text_slots", serde_json::to_value(&text_slots)?);
    context.insert("lines", json!(line_count(prefilled)));
    context.insert("prefilled_text", json!(prefilled));
    context.insert("question_counter", json!(question.counter));
    Ok(Self { kind: Kind::InputField(question), idx: None, context })
  }

  /// Checkbox question: `content` is a list of option cells.
  pub fn cbox(dc: &DictContainer, counter: &mut QuestionCounter) -> Result<Self> {
    let text_slots = dc.list_attr("content")?;

    let question = Question::new(dc, counter)?;

    let mut context = Context::default();
    context.insert("text_slots", serde_json::to_value(text_slots)?);
    context.insert("cbox_id", json!(CBOX_ID));
    context.insert("question_counter", json!(question.counter));
    Ok(Self { kind: Kind::CBox(question), idx: None, context })
  }

  pub fn set_idx(&mut self, idx: usize) -> Result<()> {
    if let Some(prev) = self.idx {
      return Err(Error::IndexAlreadySet(prev));
    }
    self.context.insert("idx", json!(idx));
    self.idx = Some(idx);
    Ok(())
  }

  pub fn idx(&self) -> Option<usize> {
    self.idx
  }

  pub fn context(&self) -> &Context {
    &self.context
  }

  pub fn type_str(&self) -> &'static str {
    match self.kind {
      Kind::Text => SegmentType::Text.as_str(),
      Kind::Src => SegmentType::Source.as_str(),
      Kind::InputField(_) => SegmentType::Input.as_str(),
      Kind::CBox(_) => SegmentType::Check.as_str(),
    }
  }

  pub fn template(&self) -> &'static str {
    match self.kind {
      Kind::Text => "tasks/txt.html",
      Kind::Src => "tasks/src.html",
      Kind::InputField(_) => "tasks/cq2_input_field.html",
      Kind::CBox(_) => "tasks/cq2_cbox.html",
    }
  }

  pub fn question(&self) -> Option<&Question> {
    match &self.kind {
      Kind::InputField(q) | Kind::CBox(q) => Some(q),
      Kind::Text | Kind::Src => None,
    }
  }

  pub fn is_question(&self) -> bool {
    self.question().is_some()
  }

  #[allow(dead_code)]
  pub fn solution(&self) -> Option<&[SolutionContainer]> {
    self.question().map(|q| q.solution.as_slice())
  }

  pub fn user_was_correct(&self) -> Option<bool> {
    self.question().and_then(|q| q.user_was_correct)
  }

  /// Check the submitted answer for this segment and record the outcome in the context.
  ///
  /// Segments without a solution ignore the submission.
  #[instrument(level = "debug", target = "segment", skip(self, submission), fields(idx = ?self.idx))]
  pub fn update_user_solution(&mut self, submission: &Submission) -> Result<()> {
    let question = match &mut self.kind {
      Kind::InputField(q) | Kind::CBox(q) => q,
      Kind::Text | Kind::Src => return Ok(()),
    };
    let idx = self.idx.ok_or(Error::IndexNotSet)?;
    let raw = submission.get(&idx).ok_or(Error::MissingSubmission(idx))?;
    let user_solution = preprocess_user_solution(raw);

    let correct = question.test_user_was_correct(&user_solution);
    question.user_was_correct = Some(correct);

    let (css_class, printed) = if correct {
      (CSS_RIGHT, RIGHT_SOLUTION_TEXT.to_string())
    } else {
      (CSS_WRONG, question.printed_solution().to_string())
    };
    debug!(target: "segment", idx, correct, answer_len = user_solution.len(), "answer checked");

    self.context.insert("prefilled_text", json!(user_solution));
    self.context.insert("css_class", json!(css_class));
    self.context.insert("printed_solution", json!(printed));
    Ok(())
  }
}

/// Description cells of an input field, each marked `multiline` when its text spans lines.
fn description_cells(dc: &DictContainer) -> Result<Vec<DictContainer>> {
  dc.list_attr("content")?
    .iter()
    .map(|cell| {
      let mut cell = cell
        .as_dict()
        .cloned()
        .ok_or_else(|| Error::wrong_type(dc.name(), "content", "a list of objects"))?;
      if cell.str_attr("content")?.contains('\n') {
        cell.set("multiline", Value::Bool(true));
      }
      Ok(cell)
    })
    .collect()
}

/// Build one segment from its raw dictionary.
///
/// `idx` is the position in the task's segment list and is what submitted
/// answers are keyed by.
pub fn make_segment(segment_dict: &Json, idx: usize, counter: &mut QuestionCounter) -> Result<Segment> {
  let typestr = match segment_dict.get("type") {
    Some(Json::String(s)) => s.as_str(),
    Some(_) => return Err(Error::wrong_type(&format!("segment {}", idx), "type", "a string")),
    None if segment_dict.is_object() => return Err(Error::MissingType),
    None => return Err(Error::NotAnObject { what: format!("segment {}", idx) }),
  };
  let segment_type = SegmentType::from_typestr(typestr)?;

  let dc = DictContainer::from_json(segment_dict, typestr)?;
  let mut segment = match segment_type {
    SegmentType::Text => Segment::text(&dc)?,
    SegmentType::Source => Segment::src(&dc)?,
    SegmentType::Input => Segment::input_field(&dc, counter)?,
    SegmentType::Check => Segment::cbox(&dc, counter)?,
    SegmentType::Radio => return Err(Error::Unsupported(typestr.to_string())),
  };
  segment.set_idx(idx)?;
  debug!(target: "segment", idx, kind = typestr, "segment built");
  Ok(segment)
}

/// Number of lines in `text`. Every line boundary counts: `\n`, `\r`, `\r\n`,
/// vertical tab, form feed, the file/group/record separators, NEL and the
/// Unicode line and paragraph separators. A trailing boundary opens no new line.
fn line_count(text: &str) -> usize {
  let mut lines = 0;
  let mut open = false;
  let mut chars = text.chars().peekable();
  while let Some(c) = chars.next() {
    match c {
      '\r' => {
        if chars.peek() == Some(&'\n') {
          chars.next();
        }
        lines += 1;
        open = false;
      }
      '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}' => {
        lines += 1;
        open = false;
      }
      _ => open = true,
    }
  }
  if open {
    lines += 1;
  }
  lines
}

#[cfg(test)]
mod tests {
  use super::*;

  fn question(solution: Json) -> Segment {
    let raw = json!({
      "type": "input",
      "content": [{"content": "What is 6*7?", "type": "text"}],
      "answer": {"content": "", "type": "text"},
      "solution": solution,
    });
    make_segment(&raw, 0, &mut QuestionCounter::new()).unwrap()
  }

  fn submit(seg: &mut Segment, text: &str) {
    let mut sub = Submission::new();
    sub.insert(seg.idx().unwrap(), text.to_string());
    seg.update_user_solution(&sub).unwrap();
  }

  #[test]
  fn text_segment_context() {
    let raw = json!({"type": "text", "content": "hello\nworld"});
    let seg = make_segment(&raw, 0, &mut QuestionCounter::new()).unwrap();
    assert_eq!(seg.context().get("text"), Some(&json!("hello\nworld")));
    assert_eq!(seg.context().get("multiline"), Some(&json!(true)));
    assert_eq!(seg.context().get("comment"), Some(&json!(false)));
    assert_eq!(seg.context().get("idx"), Some(&json!(0)));
    assert!(!seg.is_question());
  }

  #[test]
  fn source_uses_its_own_template() {
    let raw = json!({"type": "source", "content": "print(1)", "comment": true});
    let seg = make_segment(&raw, 3, &mut QuestionCounter::new()).unwrap();
    assert_eq!(seg.template(), "tasks/src.html");
    assert_eq!(seg.type_str(), "source");
    assert_eq!(seg.context().get("multiline"), Some(&json!(false)));
    assert_eq!(seg.context().get("comment"), Some(&json!(true)));
  }

  #[test]
  fn context_keys_have_no_internal_prefix() {
    let raws = [
      json!({"type": "text", "content": "a"}),
      json!({"type": "source", "content": "b"}),
      json!({"type": "input", "content": [], "answer": {"content": "x\ny"}, "solution": "1"}),
      json!({"type": "check", "content": [{"content": "opt"}], "solution": true}),
    ];
    let mut counter = QuestionCounter::new();
    for (i, raw) in raws.iter().enumerate() {
      let seg = make_segment(raw, i, &mut counter).unwrap();
      assert!(seg.context().keys().all(|k| !k.starts_with("c_")), "{:?}", seg.context());
    }
  }

  #[test]
  fn input_field_context() {
    let raw = json!({
      "type": "input",
      "content": [{"content": "line one\nline two"}, {"content": "x = "}],
      "answer": {"content": "a\nb\nc"},
      "solution": {"content": "42"},
    });
    let seg = make_segment(&raw, 2, &mut QuestionCounter::new()).unwrap();
    let ctx = seg.context();
    assert_eq!(ctx.get("lines"), Some(&json!(3)));
    assert_eq!(ctx.get("prefilled_text"), Some(&json!("a\nb\nc")));
    assert_eq!(ctx.get("question_counter"), Some(&json!(1)));
    assert_eq!(
      ctx.get("text_slots"),
      Some(&json!([{"content": "line one\nline two", "multiline": true}, {"content": "x = "}]))
    );
    assert_eq!(seg.template(), "tasks/cq2_input_field.html");
  }

  #[test]
  fn cbox_context() {
    let raw = json!({"type": "check", "content": [{"content": "Is 1 odd?"}], "solution": true});
    let mut counter = QuestionCounter::new();
    counter.next();
    let seg = make_segment(&raw, 1, &mut counter).unwrap();
    assert_eq!(seg.context().get("cbox_id"), Some(&json!("123")));
    assert_eq!(seg.context().get("question_counter"), Some(&json!(2)));
    assert_eq!(seg.solution().unwrap(), &[SolutionContainer::new("True")]);
  }

  #[test]
  fn comment_value_is_kept_as_written() {
    let raw = json!({"type": "text", "content": "x", "comment": "hint: use a loop"});
    let seg = make_segment(&raw, 0, &mut QuestionCounter::new()).unwrap();
    assert_eq!(seg.context().get("comment"), Some(&json!("hint: use a loop")));

    let raw = json!({"type": "source", "content": "x", "comment": 0});
    let seg = make_segment(&raw, 0, &mut QuestionCounter::new()).unwrap();
    assert_eq!(seg.context().get("comment"), Some(&json!(0)));
  }

  #[test]
  fn line_count_splits_on_every_line_boundary() {
    assert_eq!(line_count(""), 0);
    assert_eq!(line_count("a"), 1);
    assert_eq!(line_count("a\n"), 1);
    assert_eq!(line_count("a\n\n"), 2);
    assert_eq!(line_count("a\rb"), 2);
    assert_eq!(line_count("a\r\nb"), 2);
    assert_eq!(line_count("a\r\n"), 1);
    assert_eq!(line_count("a\n\rb"), 3);
    assert_eq!(line_count("a\u{2028}b\x0cc"), 3);
  }

  #[test]
  fn prefilled_text_with_old_mac_line_endings_counts_lines() {
    let raw = json!({"type": "input", "content": [], "answer": {"content": "a\rb\rc"}, "solution": "1"});
    let seg = make_segment(&raw, 0, &mut QuestionCounter::new()).unwrap();
    assert_eq!(seg.context().get("lines"), Some(&json!(3)));
  }

  #[test]
  fn boolean_and_null_solutions_use_capitalised_text() {
    let raw = json!({"type": "check", "content": [{"content": "x is a list"}], "solution": true});
    let mut seg = make_segment(&raw, 0, &mut QuestionCounter::new()).unwrap();
    submit(&mut seg, "True");
    assert_eq!(seg.user_was_correct(), Some(true));
    submit(&mut seg, "true");
    assert_eq!(seg.user_was_correct(), Some(false));
    assert_eq!(seg.context().get("printed_solution"), Some(&json!("True")));

    let mut seg = question(json!(false));
    submit(&mut seg, "False");
    assert_eq!(seg.user_was_correct(), Some(true));

    let mut seg = question(json!(null));
    submit(&mut seg, "");
    assert_eq!(seg.user_was_correct(), Some(false));
    assert_eq!(seg.context().get("printed_solution"), Some(&json!("None")));
    submit(&mut seg, "None");
    assert_eq!(seg.user_was_correct(), Some(true));
  }

  #[test]
  fn input_field_without_answer_fails() {
    let raw = json!({"type": "input", "content": [], "solution": "1"});
    let err = make_segment(&raw, 0, &mut QuestionCounter::new()).unwrap_err();
    assert!(matches!(err, Error::MissingField { ref field, .. } if field == "answer"));
  }

  #[test]
  fn question_without_solution_fails() {
    let raw = json!({"type": "check", "content": []});
    assert!(matches!(
      make_segment(&raw, 0, &mut QuestionCounter::new()),
      Err(Error::MissingField { .. })
    ));
  }

  #[test]
  fn text_with_list_content_fails() {
    let raw = json!({"type": "text", "content": ["a", "b"]});
    assert!(matches!(
      make_segment(&raw, 0, &mut QuestionCounter::new()),
      Err(Error::WrongFieldType { .. })
    ));
  }

  #[test]
  fn missing_unknown_and_unsupported_types() {
    let mut counter = QuestionCounter::new();
    assert!(matches!(make_segment(&json!({"content": "x"}), 0, &mut counter), Err(Error::MissingType)));
    assert!(matches!(
      make_segment(&json!({"type": "video"}), 0, &mut counter),
      Err(Error::UnknownType(t)) if t == "video"
    ));
    assert!(matches!(
      make_segment(&json!({"type": "radio", "content": []}), 0, &mut counter),
      Err(Error::Unsupported(_))
    ));
    assert!(matches!(make_segment(&json!("text"), 0, &mut counter), Err(Error::NotAnObject { .. })));
  }

  #[test]
  fn solution_shapes_are_unified() {
    let shapes = [
      json!("42"),
      json!(42),
      json!(true),
      json!({"content": "42", "type": "text"}),
      json!(["42", {"content": "forty-two"}]),
    ];
    for shape in shapes {
      let seg = question(shape.clone());
      let sol = seg.solution().unwrap();
      assert!(!sol.is_empty(), "{shape}");
    }
    let seg = question(json!(["42", {"content": "forty-two"}]));
    assert_eq!(seg.solution().unwrap(), &[SolutionContainer::new("42"), SolutionContainer::new("forty-two")]);
  }

  #[test]
  fn empty_or_nested_solution_lists_fail() {
    let raw = |sol: Json| json!({"type": "check", "content": [], "solution": sol});
    let mut counter = QuestionCounter::new();
    assert!(matches!(make_segment(&raw(json!([])), 0, &mut counter), Err(Error::EmptySolution)));
    assert!(matches!(
      make_segment(&raw(json!([["42"]])), 0, &mut counter),
      Err(Error::WrongFieldType { .. })
    ));
  }

  #[test]
  fn carriage_returns_are_stripped_before_comparison() {
    let mut seg = question(json!("42"));
    submit(&mut seg, "42\r");
    assert_eq!(seg.user_was_correct(), Some(true));
    assert_eq!(seg.context().get("css_class"), Some(&json!("sol_right")));
    assert_eq!(seg.context().get("printed_solution"), Some(&json!("OK")));
    assert_eq!(seg.context().get("prefilled_text"), Some(&json!("42")));
  }

  #[test]
  fn wrong_answer_prints_first_solution() {
    let mut seg = question(json!("42"));
    submit(&mut seg, "43");
    assert_eq!(seg.user_was_correct(), Some(false));
    assert_eq!(seg.context().get("css_class"), Some(&json!("sol_wrong")));
    assert_eq!(seg.context().get("printed_solution"), Some(&json!("42")));
  }

  #[test]
  fn empty_solution_prints_placeholder() {
    let mut seg = question(json!(""));
    submit(&mut seg, "x");
    assert_eq!(seg.context().get("printed_solution"), Some(&json!(EMPTY_SOLUTION_TEXT)));
  }

  #[test]
  fn any_alternative_is_accepted_and_no_other_normalisation_happens() {
    let mut seg = question(json!(["a = 1", "a=1"]));
    submit(&mut seg, "a=1");
    assert_eq!(seg.user_was_correct(), Some(true));

    submit(&mut seg, " a=1");
    assert_eq!(seg.user_was_correct(), Some(false));
    assert_eq!(seg.context().get("printed_solution"), Some(&json!("a = 1")));

    submit(&mut seg, "A = 1");
    assert_eq!(seg.user_was_correct(), Some(false));
  }

  #[test]
  fn multiline_answer_with_crlf_matches() {
    let mut seg = question(json!({"content": "x = 1\ny = 2"}));
    submit(&mut seg, "x = 1\r\ny = 2");
    assert_eq!(seg.user_was_correct(), Some(true));
  }

  #[test]
  fn missing_submission_fails() {
    let mut seg = question(json!("42"));
    let err = seg.update_user_solution(&Submission::new()).unwrap_err();
    assert!(matches!(err, Error::MissingSubmission(0)));
  }

  #[test]
  fn text_segments_ignore_submissions() {
    let raw = json!({"type": "text", "content": "hi"});
    let mut seg = make_segment(&raw, 0, &mut QuestionCounter::new()).unwrap();
    let before = seg.context().clone();
    seg.update_user_solution(&Submission::new()).unwrap();
    assert_eq!(seg.context(), &before);
    assert_eq!(seg.user_was_correct(), None);
  }

  #[test]
  fn idx_is_set_once() {
    let mut seg = question(json!("1"));
    assert!(matches!(seg.set_idx(5), Err(Error::IndexAlreadySet(0))));
    assert_eq!(seg.idx(), Some(0));
  }

  #[test]
  fn same_input_gives_same_context() {
    let raw = json!({"type": "input", "content": [{"content": "q"}], "answer": {"content": "a"}, "solution": "b"});
    let a = make_segment(&raw, 4, &mut QuestionCounter::new()).unwrap();
    let b = make_segment(&raw, 4, &mut QuestionCounter::new()).unwrap();
    assert_eq!(a.context(), b.context());
  }
}
