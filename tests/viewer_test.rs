// Integration tests for the trace viewer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tracetty::trace::{frames_at, SearchResults, TraceStore};
use tracetty::ui::app::{App, FocusedPane};
use tracetty::ui::layout::PaneAreas;
use tracetty::ui::panes::{render_instruction_pane, render_register_pane};

const RAW: &str = "eax  0x01\nebx  0x07\neip  0x10\ncall foo\n---\neax  0x01\nebx  0x07\neip  0x20\nmov eax,2\n---\neax  0x02\nebx  0x07\neip  0x30\nret\n";

fn store() -> TraceStore {
    TraceStore::parse(RAW).expect("trace should parse")
}

fn app() -> App {
    App::new(store(), String::new())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, c: char) {
    app.handle_key(key(KeyCode::Char(c)));
}

fn type_line(app: &mut App, prefix: char, text: &str) {
    press(app, prefix);
    for c in text.chars() {
        press(app, c);
    }
    app.handle_key(key(KeyCode::Enter));
}

#[test]
fn disassembly_round_trips_through_the_store() {
    let store = store();
    let expected = ["call foo", "mov eax,2", "ret"];
    for (i, mnemonic) in expected.iter().enumerate() {
        assert_eq!(store.get(i).unwrap().disassembly(), *mnemonic);
        assert_eq!(store.mnemonic(i), Some(*mnemonic));
    }
}

#[test]
fn banner_chunk_becomes_the_debug_tab() {
    let raw = format!("Loaded PE sections\n---\n{}", RAW);
    let store = TraceStore::parse(&raw).expect("trace should parse");
    assert_eq!(store.len(), 3);
    assert_eq!(store.mnemonic(0), Some("call foo"));

    let app = App::new(store, String::new());
    assert_eq!(app.tabs.tab_count(), 2);
    assert_eq!(app.tabs.tabs()[1].title, "Debug");
}

#[test]
fn call_then_ret_leaves_only_the_root_frame() {
    // Scenario A: the call at index 0 is popped again by the ret at index 2.
    let store = store();
    let frames = frames_at(&store, 2, 80, 20);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].text, "call foo");

    let mid = frames_at(&store, 1, 80, 20);
    assert_eq!(mid.len(), 2);
    assert_eq!(mid[1].text, "mov eax,2");
}

#[test]
fn register_values_differ_only_where_expected() {
    // Scenario A data check backing the diff: between records 1 and 2 only
    // eax and the program counter move, and the program counter is last.
    let store = store();
    let old = store.get(1).unwrap();
    let new = store.get(2).unwrap();
    assert_ne!(old.registers()[0], new.registers()[0]); // eax 0x01 -> 0x02
    assert_eq!(old.registers()[1], new.registers()[1]); // ebx unchanged
    assert_ne!(old.registers()[2], new.registers()[2]); // eip, never highlighted
    assert_eq!(new.registers().last().unwrap().0, "eip");
}

#[test]
fn register_pane_keeps_its_frame_without_a_record() {
    // Out-of-range index: the bordered block still draws like every other
    // pane, only the content is skipped.
    let store = store();
    let mut terminal = Terminal::new(TestBackend::new(70, 12)).unwrap();
    terminal
        .draw(|f| render_register_pane(f, f.area(), &store, 99, 98, false))
        .unwrap();
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(0, 0)].symbol(), "┌");
    assert_eq!(buffer[(2, 0)].symbol(), "R"); // " Registers " title
}

#[test]
fn out_of_range_rows_render_muted_placeholders() {
    use tracetty::ui::theme::DEFAULT_THEME;

    let store = store();
    let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
    terminal
        .draw(|f| render_instruction_pane(f, f.area(), &store, 0, false))
        .unwrap();
    let buffer = terminal.backend().buffer();
    // Inner height 7 centers index 0 at row 4; the rows above are before
    // the trace and show the dash in the muted style.
    assert_eq!(buffer[(3, 1)].symbol(), "-");
    assert_eq!(buffer[(3, 1)].fg, DEFAULT_THEME.comment);
    assert_eq!(buffer[(1, 4)].symbol(), ">");
}

#[test]
fn rendering_the_same_index_twice_is_identical() {
    let store = store();
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let draw = |terminal: &mut Terminal<TestBackend>, store: &TraceStore| {
        terminal
            .draw(|f| {
                let areas = PaneAreas::compute(f.area());
                render_register_pane(f, areas.registers, store, 1, 0, true);
                render_instruction_pane(f, areas.instructions, store, 1, false);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    };
    let first = draw(&mut terminal, &store);
    let second = draw(&mut terminal, &store);
    assert_eq!(first, second);
}

#[test]
fn search_scenario_over_the_trace() {
    // Scenario B.
    let store = store();
    let results = SearchResults::run(&store, "mov");
    assert_eq!(results.hits(), &[1]);
    assert_eq!(results.next_after(0), Some(1));
    assert_eq!(results.prev_before(2), Some(1));
    assert_eq!(results.next_after(1), None);
}

#[test]
fn stepping_is_gated_on_the_focused_pane() {
    let mut app = app();
    assert_eq!(app.focused_pane, FocusedPane::Instructions);

    press(&mut app, 'j');
    assert_eq!(app.current_index, 1);
    assert_eq!(app.previous_index, 0);
    press(&mut app, 'k');
    assert_eq!(app.current_index, 0);

    // h/l belong to the register pane and are ignored here.
    press(&mut app, 'l');
    assert_eq!(app.current_index, 0);

    press(&mut app, 'r'); // -> registers
    assert_eq!(app.focused_pane, FocusedPane::Registers);
    press(&mut app, 'l');
    assert_eq!(app.current_index, 1);
    press(&mut app, 'h');
    assert_eq!(app.current_index, 0);

    // j/k are ignored while the register pane holds focus.
    press(&mut app, 'j');
    assert_eq!(app.current_index, 0);
}

#[test]
fn boundary_keys_are_no_ops() {
    let mut app = app();
    press(&mut app, 'k');
    assert_eq!(app.current_index, 0);
    assert_eq!(app.previous_index, 0);

    press(&mut app, 'G');
    assert_eq!(app.current_index, 2);
    press(&mut app, 'j');
    assert_eq!(app.current_index, 2);
    assert_eq!(app.previous_index, 0); // unchanged by the refused step
}

#[test]
fn home_and_end_jump_to_the_trace_bounds() {
    let mut app = app();
    press(&mut app, 'G');
    assert_eq!(app.current_index, 2);
    press(&mut app, 'g');
    assert_eq!(app.current_index, 0);
    app.handle_key(key(KeyCode::End));
    assert_eq!(app.current_index, 2);
    app.handle_key(key(KeyCode::Home));
    assert_eq!(app.current_index, 0);
}

#[test]
fn focus_rotation_wraps_both_directions() {
    let mut app = app();
    press(&mut app, 'r');
    assert_eq!(app.focused_pane, FocusedPane::Registers);
    press(&mut app, 'r');
    assert_eq!(app.focused_pane, FocusedPane::Tabs);
    press(&mut app, 'r');
    assert_eq!(app.focused_pane, FocusedPane::Instructions);
    press(&mut app, 'R');
    assert_eq!(app.focused_pane, FocusedPane::Tabs);
}

#[test]
fn colon_jump_works_regardless_of_focus() {
    // Scenario D.
    let mut app = app();
    press(&mut app, 'r'); // focus the register pane
    type_line(&mut app, ':', "2");
    assert_eq!(app.current_index, 2);
}

#[test]
fn colon_jump_clamps_and_rejects_garbage() {
    let mut app = app();
    type_line(&mut app, ':', "99");
    assert_eq!(app.current_index, 2);

    type_line(&mut app, ':', "not a number");
    assert_eq!(app.current_index, 2);
}

#[test]
fn line_input_can_be_cancelled() {
    let mut app = app();
    press(&mut app, ':');
    press(&mut app, '5');
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.current_index, 0);
    // Back in normal mode: navigation keys work again.
    press(&mut app, 'j');
    assert_eq!(app.current_index, 1);
}

#[test]
fn search_jumps_and_seeds_next_prev() {
    let mut app = app();
    type_line(&mut app, '/', "mov");
    assert_eq!(app.current_index, 1);
    assert!(app.last_search.is_some());
    assert_eq!(app.status_message, "/mov (1)");

    // No hit after the only match: n is a no-op, no wrap.
    press(&mut app, 'n');
    assert_eq!(app.current_index, 1);

    press(&mut app, 'G');
    press(&mut app, 'N');
    assert_eq!(app.current_index, 1);
}

#[test]
fn empty_search_changes_nothing() {
    let mut app = app();
    type_line(&mut app, '/', "");
    assert_eq!(app.current_index, 0);
    assert!(app.last_search.is_none());
}

#[test]
fn n_without_a_search_is_ignored() {
    let mut app = app();
    press(&mut app, 'n');
    press(&mut app, 'N');
    assert_eq!(app.current_index, 0);
}

#[test]
fn tab_rotation_wraps_with_two_tabs() {
    // Scenario E: stderr contributes an Errors tab next to Stack Frames.
    let mut app = App::new(store(), "unmapped memory read\n".into());
    assert_eq!(app.tabs.tab_count(), 2);
    press(&mut app, 'c');
    assert_eq!(app.tabs.current_tab(), 1);
    press(&mut app, 'c');
    assert_eq!(app.tabs.current_tab(), 0);
    press(&mut app, 'C');
    assert_eq!(app.tabs.current_tab(), 1);
}

#[test]
fn quit_key_sets_the_flag() {
    let mut app = app();
    press(&mut app, 'q');
    assert!(app.should_quit);
}

#[test]
fn ctrl_c_also_quits() {
    let mut app = app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}
