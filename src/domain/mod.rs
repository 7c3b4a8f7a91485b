// Domain types and pure computations
mod neighbors;
mod peer;
mod timeline;

pub use neighbors::{
    MatchMethod, NeighborResult, SelfMatch, find_self, normalize_host, normalize_url, resolve,
};
pub use peer::PeerRecord;
pub use timeline::{ProgressBar, ProgressSnapshot, TimelineError, TimelineWindow};
