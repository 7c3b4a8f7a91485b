mod neighbor_loader;
mod provider;

pub use {
    neighbor_loader::{load_neighbors, spawn_neighbor_fetch},
    provider::{HttpPeerFeed, PeerFeed, StaticPeerFeed, parse_peer_list},
};
