//! One datasource trait per domain, so collectors can be fed from fixtures.

use crate::connector::CommandChannel;
use crate::model::{
    AlarmCounter, BgpSession, EnvironmentItem, InterfaceDiagnostics, InterfaceStats,
    IsisAdjacencies, OspfArea, RouteEngineStats, RoutingTable,
};
use crate::rpc::{RpcClient, RpcError};

pub trait InterfaceStatsDatasource {
    fn interface_stats(&self) -> Result<Vec<InterfaceStats>, RpcError>;
}

pub trait AlarmDatasource {
    fn alarm_counter(&self) -> Result<AlarmCounter, RpcError>;
}

pub trait BgpDatasource {
    fn bgp_sessions(&self) -> Result<Vec<BgpSession>, RpcError>;
}

pub trait OspfDatasource {
    fn ospf_areas(&self) -> Result<Vec<OspfArea>, RpcError>;
}

pub trait IsisDatasource {
    fn isis_adjacencies(&self) -> Result<IsisAdjacencies, RpcError>;
}

pub trait RoutingTableDatasource {
    fn routing_tables(&self) -> Result<Vec<RoutingTable>, RpcError>;
}

pub trait RoutingEngineDatasource {
    fn route_engine_stats(&self) -> Result<RouteEngineStats, RpcError>;
}

pub trait EnvironmentDatasource {
    fn environment_items(&self) -> Result<Vec<EnvironmentItem>, RpcError>;
}

pub trait InterfaceDiagnosticsDatasource {
    fn interface_diagnostics(&self) -> Result<Vec<InterfaceDiagnostics>, RpcError>;
}

impl<C: CommandChannel> InterfaceStatsDatasource for RpcClient<C> {
    fn interface_stats(&self) -> Result<Vec<InterfaceStats>, RpcError> {
        RpcClient::interface_stats(self)
    }
}

impl<C: CommandChannel> AlarmDatasource for RpcClient<C> {
    fn alarm_counter(&self) -> Result<AlarmCounter, RpcError> {
        RpcClient::alarm_counter(self)
    }
}

impl<C: CommandChannel> BgpDatasource for RpcClient<C> {
    fn bgp_sessions(&self) -> Result<Vec<BgpSession>, RpcError> {
        RpcClient::bgp_sessions(self)
    }
}

impl<C: CommandChannel> OspfDatasource for RpcClient<C> {
    fn ospf_areas(&self) -> Result<Vec<OspfArea>, RpcError> {
        RpcClient::ospf_areas(self)
    }
}

impl<C: CommandChannel> IsisDatasource for RpcClient<C> {
    fn isis_adjacencies(&self) -> Result<IsisAdjacencies, RpcError> {
        RpcClient::isis_adjacencies(self)
    }
}

impl<C: CommandChannel> RoutingTableDatasource for RpcClient<C> {
    fn routing_tables(&self) -> Result<Vec<RoutingTable>, RpcError> {
        RpcClient::routing_tables(self)
    }
}

impl<C: CommandChannel> RoutingEngineDatasource for RpcClient<C> {
    fn route_engine_stats(&self) -> Result<RouteEngineStats, RpcError> {
        RpcClient::route_engine_stats(self)
    }
}

impl<C: CommandChannel> EnvironmentDatasource for RpcClient<C> {
    fn environment_items(&self) -> Result<Vec<EnvironmentItem>, RpcError> {
        RpcClient::environment_items(self)
    }
}

impl<C: CommandChannel> InterfaceDiagnosticsDatasource for RpcClient<C> {
    fn interface_diagnostics(&self) -> Result<Vec<InterfaceDiagnostics>, RpcError> {
        RpcClient::interface_diagnostics(self)
    }
}
