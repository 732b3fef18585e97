// crates/bracket_spans/tests/integration_bf.rs

use bracket_spans::extract_spans;

#[test]
fn test_hello_world_loops() {
    // Classic hello-world prologue with one nested loop.
    let program = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.";
    let spans: Vec<&str> = extract_spans(program).collect();
    assert_eq!(
        spans,
        vec![
            ">++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-",
            ">++>+++>+++>+<<<<-",
            "<",
        ]
    );
}

#[test]
fn test_multiline_program_keeps_newlines() {
    let program = "+[\n>-\n]\n[<]\n";
    let spans: Vec<&str> = extract_spans(program).collect();
    assert_eq!(spans, vec!["\n>-\n", "<"]);
}

#[test]
fn test_every_span_is_balanced() {
    let program = "[[a][b[c]]][d]e[f[g]h]";
    for span in extract_spans(program) {
        let opens = span.matches('[').count();
        let closes = span.matches(']').count();
        assert_eq!(opens, closes, "span {:?} is not balanced", span);
    }
}
