use chip8_core::{Chip8, Config, Error, ExecState};

const KEYMAP: [char; 16] = [
    'x', '1', '2', '3', 'q', 'w', 'e', 'a', 's', 'd', 'z', 'c', '4', 'r', 'f', 'v',
];

fn assemble(program: &[u16]) -> Vec<u8> {
    program.iter().flat_map(|op| op.to_be_bytes()).collect()
}

fn run(program: &[u16], steps: usize) -> Chip8<char> {
    let mut chip8 = Chip8::with_seed(Config::new(KEYMAP), 0x1);
    chip8.load(&assemble(program)).unwrap();
    for _ in 0..steps {
        chip8.step().unwrap();
    }
    chip8
}

#[test]
fn test_subroutine_call_and_return() {
    let chip8 = run(
        &[
            0x6005, // 200: LD V0, 5
            0x2208, // 202: CALL 208
            0x7001, // 204: ADD V0, 1
            0x1206, // 206: JP 206
            0x700A, // 208: ADD V0, 10
            0x00EE, // 20A: RET
        ],
        6,
    );
    assert_eq!(chip8.registers().v[0x0], 16);
    assert_eq!(chip8.registers().pc, 0x206);
    assert_eq!(chip8.stack().sp(), 0);
}

#[test]
fn test_draws_font_glyph() {
    let mut chip8 = run(
        &[
            0x6107, // LD V1, 7
            0xF129, // LD F, V1
            0xD005, // DRW V0, V0, 5
        ],
        3,
    );
    assert_eq!(chip8.registers().i, 35);
    assert!(chip8.take_redraw());

    // 7 is F0 10 20 40 40
    let screen = chip8.screen();
    for x in 0..4 {
        assert_eq!(screen.is_set(x, 0), Ok(true));
    }
    assert_eq!(screen.is_set(3, 1), Ok(true));
    assert_eq!(screen.is_set(2, 2), Ok(true));
    assert_eq!(screen.is_set(1, 3), Ok(true));
    assert_eq!(screen.is_set(0, 1), Ok(false));
}

#[test]
fn test_bcd_round_trips_through_memory() {
    let chip8 = run(
        &[
            0x6A9C, // LD VA, 156
            0xA300, // LD I, 300
            0xFA33, // LD B, VA
            0xF265, // LD V2, [I]
        ],
        4,
    );
    assert_eq!(chip8.registers().v[0x0..0x3], [1, 5, 6]);
    assert_eq!(chip8.memory().read(0x300, 3), Ok(&[1, 5, 6][..]));
}

#[test]
fn test_waits_for_key_press() {
    let mut chip8 = run(
        &[
            0xF30A, // LD V3, K
            0x6101, // LD V1, 1
        ],
        1,
    );
    assert_eq!(chip8.exec_state(), ExecState::WaitingForKey(0x3));

    chip8.step().unwrap();
    assert_eq!(chip8.registers().pc, 0x202);
    assert_eq!(chip8.registers().v[0x1], 0x0);

    assert_eq!(chip8.press('w'), Ok(Some(0x5)));
    assert_eq!(chip8.registers().v[0x3], 0x5);

    chip8.step().unwrap();
    assert_eq!(chip8.registers().v[0x1], 0x1);
}

#[test]
fn test_skips_on_held_key() {
    let mut chip8 = Chip8::with_seed(Config::new(KEYMAP), 0x1);
    chip8.press('f').unwrap();
    chip8
        .load(&assemble(&[
            0x6E0E, // LD VE, E
            0xEE9E, // SKP VE
            0x6101, // LD V1, 1
            0x6202, // LD V2, 2
        ]))
        .unwrap();
    for _ in 0..3 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.registers().v[0x1], 0x0);
    assert_eq!(chip8.registers().v[0x2], 0x2);
}

#[test]
fn test_return_without_call_faults() {
    let rom = [0x00, 0xEE];
    let mut chip8 = Chip8::with_seed(Config::new(KEYMAP), 0x1);
    chip8.load(&rom).unwrap();
    assert_eq!(chip8.step(), Err(Error::StackUnderflow));
}

#[test]
fn test_delay_timer_counts_down_between_reads() {
    let mut chip8 = run(
        &[
            0x6003, // LD V0, 3
            0xF015, // LD DT, V0
            0xF107, // LD V1, DT
        ],
        2,
    );
    chip8.tick_timers();
    chip8.step().unwrap();
    assert_eq!(chip8.registers().v[0x1], 0x2);
}
