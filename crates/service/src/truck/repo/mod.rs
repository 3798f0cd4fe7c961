pub mod seaorm;

pub use seaorm::SeaOrmTruckRepository;
