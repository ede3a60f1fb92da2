//! End-to-end scenarios: source text in, exact VM text out. Each one
//! pins down a specific emission rule rather than exercising the
//! grammar broadly — the unit tests inside `src/` already cover the
//! individual productions.

fn compile(src: &str) -> String {
    let tokens = jackc_lex::Lexer::new(src, "t.jack").tokenize().expect("lexes");
    jackc_par::compile(tokens, "t.jack").expect("compiles")
}

#[test]
fn empty_class_emits_nothing() {
    let vm = compile("class Empty {\n}\n");
    assert_eq!(vm, "");
}

#[test]
fn function_returning_a_constant() {
    let vm = compile(
        "class Main {\n\
           function int answer() {\n\
             return 42;\n\
           }\n\
         }\n",
    );
    assert_eq!(vm, "function Main.answer 0\npush constant 42\nreturn");
}

#[test]
fn method_reads_a_field() {
    let vm = compile(
        "class Point {\n\
           field int x;\n\
           method int getX() {\n\
             return x;\n\
           }\n\
         }\n",
    );
    assert_eq!(
        vm,
        "function Point.getX 0\n\
         push argument 0\n\
         pop pointer 0\n\
         push this 0\n\
         return"
    );
}

#[test]
fn constructor_allocates_and_sets_one_field() {
    let vm = compile(
        "class Point {\n\
           field int x;\n\
           constructor Point new(int ax) {\n\
             let x = ax;\n\
             return this;\n\
           }\n\
         }\n",
    );
    assert_eq!(
        vm,
        "function Point.new 0\n\
         push constant 1\n\
         call Memory.alloc 1\n\
         pop pointer 0\n\
         push argument 0\n\
         pop this 0\n\
         push pointer 0\n\
         return"
    );
}

#[test]
fn if_else_on_a_boolean_constant_shares_one_label_counter() {
    let vm = compile(
        "class Main {\n\
           function void test() {\n\
             var int x;\n\
             if (true) {\n\
               let x = 1;\n\
             } else {\n\
               let x = 2;\n\
             }\n\
             return;\n\
           }\n\
         }\n",
    );
    assert_eq!(
        vm,
        "function Main.test 1\n\
         push constant 0\n\
         not\n\
         not\n\
         if-goto IF_FALSE_0\n\
         push constant 1\n\
         pop local 0\n\
         goto IF_END_1\n\
         label IF_FALSE_0\n\
         push constant 2\n\
         pop local 0\n\
         label IF_END_1\n\
         push constant 0\n\
         return"
    );
}

#[test]
fn string_literal_is_built_character_by_character() {
    let vm = compile(
        "class Main {\n\
           function void test() {\n\
             do Output.printString(\"Hi\");\n\
             return;\n\
           }\n\
         }\n",
    );
    assert_eq!(
        vm,
        "function Main.test 0\n\
         push constant 2\n\
         call String.new 1\n\
         push constant 72\n\
         call String.appendChar 2\n\
         push constant 105\n\
         call String.appendChar 2\n\
         call Output.printString 1\n\
         pop temp 0\n\
         push constant 0\n\
         return"
    );
}
