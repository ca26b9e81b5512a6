use sixmax::table::lobby::Lobby;

fn main() {
    env_logger::init();
    let mut lobby = Lobby::new();
    let id = lobby.open(6, None);
    for _ in 0..10 {
        match lobby.play(id) {
            Ok(result) => println!("{}", result),
            Err(error) => {
                eprintln!("{}", error);
                break;
            }
        }
        if lobby.rotate(id).is_err() {
            break;
        }
    }
}
