use clap::Parser;
use tripfeat::app::TripFeatApp;

fn main() {
    env_logger::init();
    let args = TripFeatApp::parse();
    log::debug!("running {:?}", args.op);
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
