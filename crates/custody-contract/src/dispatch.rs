//! # RPC Dispatch
//!
//! The fixed function-name → positional-string-arguments surface, mapped
//! onto a typed command enum with one variant per operation and a single
//! exhaustive handler. Arity is checked before any argument is decoded;
//! an unknown name is rejected outright.

use serde::Deserialize;

use crate::domain::entities::{BatchRecord, TelemetryReading};
use crate::domain::errors::ContractError;
use crate::domain::status::StageOp;
use crate::ports::inbound::CustodyContractApi;
use crate::ports::outbound::TransactionContext;

/// A fully-typed contract invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// `init assetId sensorId`
    Genesis {
        /// Key of the record to create.
        asset_id: String,
        /// Sensor unit assigned at creation.
        sensor_id: String,
    },
    /// `createOrHarvest assetId`
    CreateOrHarvest {
        /// Target record key.
        asset_id: String,
    },
    /// `manufactureProcessing assetId`
    ManufactureProcessing {
        /// Target record key.
        asset_id: String,
    },
    /// `distributorProcessing assetId`
    DistributorProcessing {
        /// Target record key.
        asset_id: String,
    },
    /// `flagError assetId`
    FlagError {
        /// Target record key.
        asset_id: String,
    },
    /// `appendTelemetry assetId telemetryJSON`
    AppendTelemetry {
        /// Target record key.
        asset_id: String,
        /// Decoded reading.
        reading: TelemetryReading,
    },
    /// `query assetId` — stored bytes, verbatim.
    Query {
        /// Target record key.
        asset_id: String,
    },
    /// `createBatch batchJSON`
    CreateBatch {
        /// Decoded batch record.
        batch: BatchRecord,
    },
    /// `getBatchById batchId` — decoded record.
    GetBatchById {
        /// Target record key.
        batch_id: String,
    },
    /// `updateBatch batchId telemetryJSON` — returns the tx id.
    UpdateBatch {
        /// Target record key.
        batch_id: String,
        /// Decoded reading.
        reading: TelemetryReading,
    },
    /// `getHistory assetId` — JSON audit array.
    GetHistory {
        /// Target record key.
        asset_id: String,
    },
}

fn arity(function: &str, args: &[String], expected: usize) -> Result<(), ContractError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ContractError::MissingArgument {
            function: function.to_string(),
            expected,
            got: args.len(),
        })
    }
}

fn decode_json<'a, V: Deserialize<'a>>(subject: &str, raw: &'a str) -> Result<V, ContractError> {
    serde_json::from_str(raw).map_err(|e| ContractError::decode(subject, e))
}

impl Command {
    /// Parse an inbound invocation from the fixed RPC framing.
    ///
    /// ## Errors
    ///
    /// - `MissingArgument`: wrong arity for the named function.
    /// - `DecodeError`: a JSON argument failed to decode.
    /// - `UnknownFunction`: the name is not part of the surface.
    pub fn parse(function: &str, args: &[String]) -> Result<Self, ContractError> {
        match function {
            "init" => {
                arity(function, args, 2)?;
                Ok(Command::Genesis {
                    asset_id: args[0].clone(),
                    sensor_id: args[1].clone(),
                })
            }
            "createOrHarvest" => {
                arity(function, args, 1)?;
                Ok(Command::CreateOrHarvest { asset_id: args[0].clone() })
            }
            "manufactureProcessing" => {
                arity(function, args, 1)?;
                Ok(Command::ManufactureProcessing { asset_id: args[0].clone() })
            }
            "distributorProcessing" => {
                arity(function, args, 1)?;
                Ok(Command::DistributorProcessing { asset_id: args[0].clone() })
            }
            "flagError" => {
                arity(function, args, 1)?;
                Ok(Command::FlagError { asset_id: args[0].clone() })
            }
            "appendTelemetry" => {
                arity(function, args, 2)?;
                Ok(Command::AppendTelemetry {
                    asset_id: args[0].clone(),
                    reading: decode_json(&args[0], &args[1])?,
                })
            }
            "query" => {
                arity(function, args, 1)?;
                Ok(Command::Query { asset_id: args[0].clone() })
            }
            "createBatch" => {
                arity(function, args, 1)?;
                Ok(Command::CreateBatch {
                    batch: decode_json("", &args[0])?,
                })
            }
            "getBatchById" => {
                arity(function, args, 1)?;
                Ok(Command::GetBatchById { batch_id: args[0].clone() })
            }
            "updateBatch" => {
                arity(function, args, 2)?;
                Ok(Command::UpdateBatch {
                    batch_id: args[0].clone(),
                    reading: decode_json(&args[0], &args[1])?,
                })
            }
            "getHistory" => {
                arity(function, args, 1)?;
                Ok(Command::GetHistory { asset_id: args[0].clone() })
            }
            other => Err(ContractError::UnknownFunction {
                name: other.to_string(),
            }),
        }
    }
}

/// Route one parsed command through the contract API.
///
/// The single exhaustive handler: every `Command` variant maps to exactly
/// one API call. Unit operations return an empty payload; reads return
/// their JSON (or, for `query`, the stored bytes verbatim).
pub fn execute(
    api: &dyn CustodyContractApi,
    ctx: &dyn TransactionContext,
    command: Command,
) -> Result<Vec<u8>, ContractError> {
    match command {
        Command::Genesis { asset_id, sensor_id } => {
            api.genesis(ctx, &asset_id, &sensor_id)?;
            Ok(Vec::new())
        }
        Command::CreateOrHarvest { asset_id } => {
            api.apply_stage(ctx, &asset_id, StageOp::CreateOrHarvest)?;
            Ok(Vec::new())
        }
        Command::ManufactureProcessing { asset_id } => {
            api.apply_stage(ctx, &asset_id, StageOp::ManufactureProcessing)?;
            Ok(Vec::new())
        }
        Command::DistributorProcessing { asset_id } => {
            api.apply_stage(ctx, &asset_id, StageOp::DistributorProcessing)?;
            Ok(Vec::new())
        }
        Command::FlagError { asset_id } => {
            api.apply_stage(ctx, &asset_id, StageOp::FlagError)?;
            Ok(Vec::new())
        }
        Command::AppendTelemetry { asset_id, reading } => {
            api.append_telemetry(ctx, &asset_id, reading)?;
            Ok(Vec::new())
        }
        Command::Query { asset_id } => api.query(&asset_id),
        Command::CreateBatch { batch } => {
            api.create_batch(ctx, batch)?;
            Ok(Vec::new())
        }
        Command::GetBatchById { batch_id } => {
            let batch = api.get_batch_by_id(&batch_id)?;
            serde_json::to_vec(&batch).map_err(|e| ContractError::decode(batch_id.as_str(), e))
        }
        Command::UpdateBatch { batch_id, reading } => {
            let tx_id = api.update_batch(ctx, &batch_id, reading)?;
            Ok(tx_id.into_bytes())
        }
        Command::GetHistory { asset_id } => {
            let audit = api.get_history(&asset_id)?;
            serde_json::to_vec(&audit).map_err(|e| ContractError::decode(asset_id.as_str(), e))
        }
    }
}

/// Parse and route one inbound invocation in a single call.
pub fn dispatch(
    api: &dyn CustodyContractApi,
    ctx: &dyn TransactionContext,
    function: &str,
    args: &[String],
) -> Result<Vec<u8>, ContractError> {
    execute(api, ctx, Command::parse(function, args)?)
}
