use std::path::PathBuf;
use std::process;

use clap::{App, Arg};
use log::debug;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use sokoban_engine::config::{Config, LevelSource};
use sokoban_engine::{Engine, LevelSet, Moves};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-engine")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plays sokoban levels given moves in LURD notation")
        .arg(
            Arg::with_name("level")
                .short("l")
                .long("level")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("INDEX")
                .help("level to play, negative and large indices wrap around (default 0)"),
        ).arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .takes_value(true)
                .value_name("FILE")
                .help("level pack to use instead of the built-in levels"),
        ).arg(
            Arg::with_name("steps")
                .short("s")
                .long("steps")
                .help("print the board after every move"),
        ).arg(
            Arg::with_name("list")
                .long("list")
                .help("list available levels and exit"),
        ).arg(
            Arg::with_name("moves")
                .value_name("MOVES")
                .help("moves to play, e.g. rrUL - case doesn't matter"),
        ).get_matches();

    let level: i64 = match matches.value_of("level") {
        None => 0,
        Some(index) => index.parse().unwrap_or_else(|err| {
            eprintln!("Invalid level index {}: {}", index, err);
            process::exit(1);
        }),
    };
    let source = match matches.value_of("file") {
        None => LevelSource::Builtin,
        Some(path) => LevelSource::File(PathBuf::from(path)),
    };
    let config = Config {
        level,
        source,
        print_steps: matches.is_present("steps"),
        list: matches.is_present("list"),
    };
    debug!("{:?}", config);

    let levels = config.source.load().unwrap_or_else(|err| {
        eprintln!("Can't load {}: {}", config.source, err);
        process::exit(1);
    });

    if config.list {
        print_levels(&levels);
        return;
    }

    let moves: Moves = matches
        .value_of("moves")
        .unwrap_or("")
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });

    play(levels, &config, &moves);
}

fn play(levels: LevelSet, config: &Config, moves: &Moves) {
    let mut engine = Engine::with_level(levels, config.level);

    let number = engine.levels().normalize(config.level) + 1;
    match engine.level().name() {
        Some(name) => println!("Level {} ({})", number, name),
        None => println!("Level {}", number),
    }
    println!("{}", engine.state().board);

    for dir in moves.dirs() {
        if engine.try_move(dir).is_moved() && config.print_steps {
            println!("{}", engine.state().board);
        }
    }
    if !config.print_steps && !engine.moves().is_empty() {
        println!("{}", engine.state().board);
    }

    if !engine.moves().is_empty() {
        println!("{}", engine.moves());
    }
    let state = engine.state();
    println!("Moves: {}", u64::from(state.move_count).separated_string());
    println!(
        "Pushes: {}",
        (engine.moves().push_cnt() as u64).separated_string()
    );
    println!("Status: {}", state.status);
}

fn print_levels(levels: &LevelSet) {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("#"),
        Cell::new("Name"),
        Cell::new("Size"),
        Cell::new("Boxes"),
        Cell::new("Targets"),
    ]));
    for (i, level) in levels.iter().enumerate() {
        let board = level.board();
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(level.name().unwrap_or("")),
            Cell::new(&format!("{}x{}", board.cols(), board.rows())),
            Cell::new(&board.box_cnt().to_string()),
            Cell::new(&board.target_cnt().to_string()),
        ]));
    }
    table.printstd();
}
