fn main() {
    if let Err(err) = gantt_rs_timeline::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
