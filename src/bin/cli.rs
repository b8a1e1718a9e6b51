use crossbeam_channel::{bounded, unbounded};
use std::io::{self, BufRead};
use std::thread;
use tempo::book::OpeningBook;
use tempo::driver::{Driver, Input, Strategy};
use tempo::logger::init_logging;
use tempo::moves::tables::tables;

fn main() {
    init_logging("logs/tempo.log", "info");
    // Build the move database before the clock can matter.
    let _ = tables();

    let strategy = match std::env::args().nth(1) {
        None => Strategy::Best,
        Some(name) => match Strategy::from_name(&name) {
            Some(s) => s,
            None => {
                println!("Error (unknown strategy): {}", name);
                Strategy::Best
            }
        },
    };

    let (queue_tx, queue_rx) = unbounded::<Input>();
    let (reader_cmd_tx, reader_cmd_rx) = bounded::<bool>(1);

    // Reader: publish each stdin line, then wait at the rendezvous for
    // permission to read the next one.
    let reader_queue = queue_tx.clone();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if reader_queue.send(Input::Line(line)).is_err() {
                return;
            }
            if !matches!(reader_cmd_rx.recv(), Ok(true)) {
                return;
            }
        }
        let _ = reader_queue.send(Input::Eof);
        let _ = reader_cmd_rx.recv();
    });

    let book = OpeningBook::load("data");
    let driver = Driver::new(
        strategy,
        book,
        io::stdout(),
        queue_tx,
        Some(reader_cmd_tx),
    );
    driver.run(queue_rx);
}
