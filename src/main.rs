use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use spotify_web_api::{
    SpotifyClient,
    cli::{self, ArtistView},
    config, error,
    types::{AlbumGroup, BrowseOptions, RecommendationRequest, SearchType},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the catalog
    Search(SearchOptions),

    /// Show an artist, its albums, top tracks or related artists
    Artist(ArtistOptions),

    /// Show an album or its tracks
    Album(AlbumOptions),

    /// Show tracks or their audio features by ID
    Tracks(TracksOptions),

    /// List browse categories
    Categories(BrowseArgs),

    /// Show a browse category or its playlists
    Category(CategoryOptions),

    /// List genres usable as recommendation seeds
    Genres,

    /// List new album releases
    NewReleases(BrowseArgs),

    /// List featured playlists
    Featured(FeaturedOptions),

    /// Recommend tracks from artist, genre and track seeds
    Recommend(RecommendOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    query: String,
    /// One of artist, album, playlist, track
    #[clap(long = "type", default_value = "artist")]
    search_type: SearchType,
    #[clap(long, default_value_t = 10)]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Artist name, or Spotify ID with --id
    artist: String,
    /// Treat the argument as a Spotify ID
    #[clap(long)]
    id: bool,
    #[clap(long, conflicts_with_all = ["top_tracks", "related"])]
    albums: bool,
    #[clap(long, conflicts_with = "related")]
    top_tracks: bool,
    #[clap(long)]
    related: bool,
    /// Album group(s) to include with --albums; can be repeated
    #[clap(long = "group", action = ArgAction::Append, num_args = 1)]
    groups: Vec<AlbumGroup>,
    #[clap(long, default_value_t = 20)]
    limit: u32,
    #[clap(long, default_value = config::DEFAULT_MARKET)]
    country: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Album name, or Spotify ID with --id
    album: String,
    #[clap(long)]
    id: bool,
    #[clap(long)]
    tracks: bool,
    #[clap(long, default_value_t = 20)]
    limit: u32,
    #[clap(long, default_value = config::DEFAULT_MARKET)]
    market: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    #[clap(required = true)]
    ids: Vec<String>,
    #[clap(long)]
    features: bool,
    #[clap(long, default_value = config::DEFAULT_MARKET)]
    market: String,
}

#[derive(Parser, Debug, Clone)]
pub struct BrowseArgs {
    #[clap(long, default_value = config::DEFAULT_MARKET)]
    country: String,
    #[clap(long, default_value = "en_US")]
    locale: String,
    #[clap(long, default_value_t = 20)]
    limit: u32,
    #[clap(long, default_value_t = 0)]
    offset: u32,
}

impl From<BrowseArgs> for BrowseOptions {
    fn from(args: BrowseArgs) -> Self {
        BrowseOptions {
            country: args.country,
            locale: args.locale,
            limit: args.limit,
            offset: args.offset,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CategoryOptions {
    category_id: String,
    #[clap(long)]
    playlists: bool,
    #[clap(flatten)]
    browse: BrowseArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct FeaturedOptions {
    /// Local time, e.g. 2014-10-23T09:00:00
    #[clap(long)]
    timestamp: Option<String>,
    #[clap(flatten)]
    browse: BrowseArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Seed artist name; can be repeated
    #[clap(long = "artist", action = ArgAction::Append, num_args = 1)]
    artists: Vec<String>,
    /// Seed genre; can be repeated
    #[clap(long = "genre", action = ArgAction::Append, num_args = 1)]
    genres: Vec<String>,
    /// Seed track ID; can be repeated
    #[clap(long = "track", action = ArgAction::Append, num_args = 1)]
    tracks: Vec<String>,
    #[clap(long, default_value_t = 20)]
    limit: u32,
    #[clap(long, default_value = config::DEFAULT_MARKET)]
    market: String,
    #[clap(long)]
    target_popularity: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let mut client = match SpotifyClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("Cannot create Spotify client. Err: {}", e),
    };

    match cli.command {
        Command::Search(opt) => cli::search(&mut client, &opt.query, opt.search_type, opt.limit),
        Command::Artist(opt) => {
            let view = if opt.albums {
                ArtistView::Albums
            } else if opt.top_tracks {
                ArtistView::TopTracks
            } else if opt.related {
                ArtistView::Related
            } else {
                ArtistView::Info
            };
            cli::artist(
                &mut client,
                cli::entity(opt.artist, opt.id),
                view,
                &opt.groups,
                opt.limit,
                &opt.country,
            )
        }
        Command::Album(opt) => cli::album(
            &mut client,
            cli::entity(opt.album, opt.id),
            opt.tracks,
            opt.limit,
            &opt.market,
        ),
        Command::Tracks(opt) => cli::tracks(&mut client, &opt.ids, opt.features, &opt.market),
        Command::Categories(opt) => cli::categories(&mut client, &opt.into()),
        Command::Category(opt) => {
            cli::category(&mut client, &opt.category_id, opt.playlists, &opt.browse.into())
        }
        Command::Genres => cli::genres(&mut client),
        Command::NewReleases(opt) => cli::new_releases(&mut client, &opt.into()),
        Command::Featured(opt) => cli::featured(
            &mut client,
            &opt.browse.into(),
            opt.timestamp.as_deref(),
        ),
        Command::Recommend(opt) => {
            let request = RecommendationRequest {
                seed_artists: opt
                    .artists
                    .into_iter()
                    .map(|name| cli::entity(name, false))
                    .collect(),
                seed_genres: opt.genres,
                seed_tracks: opt.tracks,
                limit: opt.limit,
                market: opt.market,
                target_popularity: opt.target_popularity,
            };
            cli::recommend(&mut client, &request)
        }
        Command::Completions(_) => {}
    }
}
