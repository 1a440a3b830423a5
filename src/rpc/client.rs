use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::commands::{self, with_xml_output};
use super::envelope::{
    self, alarm::AlarmReply, bgp::BgpReply, environment::EnvironmentReply,
    interface_diagnostics::InterfaceDiagnosticsReply, interfaces::InterfaceReply, isis::IsisReply,
    ospf::Ospf3Reply, route::RouteReply, routing_engine::RoutingEngineReply,
};
use super::filter::AlarmFilter;
use super::mapping;
use super::RpcError;
use crate::connector::CommandChannel;
use crate::model::{
    AlarmCounter, BgpSession, EnvironmentItem, InterfaceDiagnostics, InterfaceStats,
    IsisAdjacencies, OspfArea, RouteEngineStats, RoutingTable,
};

/// Longest reply prefix written to the trace log.
const MAX_LOGGED_REPLY: usize = 4096;

/// Issues domain commands over one channel and maps the replies.
///
/// The client holds no state between calls apart from the compiled alarm
/// filter. Calls on one client must not overlap, as the channel carries a
/// single command at a time.
pub struct RpcClient<C: CommandChannel> {
    channel: C,
    alarm_filter: AlarmFilter,
}

impl<C: CommandChannel> RpcClient<C> {
    pub fn new(channel: C, alarm_filter: AlarmFilter) -> Self {
        Self {
            channel,
            alarm_filter,
        }
    }

    /// Target the channel is bound to.
    pub fn host(&self) -> &str {
        self.channel.host()
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Counts alarms from the system list, then the chassis list.
    pub fn alarm_counter(&self) -> Result<AlarmCounter, RpcError> {
        let mut counter = AlarmCounter::default();
        for command in [commands::SYSTEM_ALARMS, commands::CHASSIS_ALARMS] {
            let reply: AlarmReply = self.run_command_and_parse(command)?;
            mapping::count_alarms(&reply.information, &self.alarm_filter, &mut counter);
        }
        Ok(counter)
    }

    pub fn interface_stats(&self) -> Result<Vec<InterfaceStats>, RpcError> {
        let reply: InterfaceReply = self.run_command_and_parse(commands::INTERFACES)?;
        Ok(mapping::interface_stats(reply.information))
    }

    pub fn bgp_sessions(&self) -> Result<Vec<BgpSession>, RpcError> {
        let reply: BgpReply = self.run_command_and_parse(commands::BGP)?;
        Ok(mapping::bgp_sessions(reply.information))
    }

    pub fn ospf_areas(&self) -> Result<Vec<OspfArea>, RpcError> {
        let reply: Ospf3Reply = self.run_command_and_parse(commands::OSPF)?;
        Ok(mapping::ospf_areas(reply.information))
    }

    pub fn isis_adjacencies(&self) -> Result<IsisAdjacencies, RpcError> {
        let reply: IsisReply = self.run_command_and_parse(commands::ISIS)?;
        Ok(mapping::isis_adjacencies(&reply.information))
    }

    pub fn routing_tables(&self) -> Result<Vec<RoutingTable>, RpcError> {
        let reply: RouteReply = self.run_command_and_parse(commands::ROUTES)?;
        Ok(mapping::routing_tables(reply.information))
    }

    pub fn route_engine_stats(&self) -> Result<RouteEngineStats, RpcError> {
        let reply: RoutingEngineReply = self.run_command_and_parse(commands::ROUTING_ENGINE)?;
        Ok(mapping::route_engine_stats(&reply.information))
    }

    /// Temperature sensors, one per name, in no particular order.
    pub fn environment_items(&self) -> Result<Vec<EnvironmentItem>, RpcError> {
        let reply: EnvironmentReply = self.run_command_and_parse(commands::ENVIRONMENT)?;
        Ok(mapping::environment_items(reply.information))
    }

    pub fn interface_diagnostics(&self) -> Result<Vec<InterfaceDiagnostics>, RpcError> {
        let reply: InterfaceDiagnosticsReply =
            self.run_command_and_parse(commands::INTERFACE_DIAGNOSTICS)?;
        Ok(mapping::interface_diagnostics(reply.information))
    }

    fn run_command_and_parse<T: DeserializeOwned>(&self, command: &str) -> Result<T, RpcError> {
        debug!("running command on {}: {}", self.host(), command);

        let output = self
            .channel
            .run_command(&with_xml_output(command))
            .map_err(|source| RpcError::Transport {
                command: command.to_string(),
                source,
            })?;

        trace!(
            "output for {}: {}",
            self.host(),
            truncate_reply(&output, MAX_LOGGED_REPLY)
        );

        envelope::decode(&output).map_err(|source| RpcError::Decode {
            command: command.to_string(),
            source,
        })
    }
}

fn truncate_reply(bytes: &[u8], max: usize) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) if s.len() > max => {
            let mut end = max;
            while end > 0 && !s.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &s[..end])
        }
        Ok(s) => s.to_string(),
        Err(_) => "<non-utf8 reply>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockChannel;

    fn client() -> RpcClient<MockChannel> {
        RpcClient::new(MockChannel::typical_router("r1"), AlarmFilter::none())
    }

    #[test]
    fn test_alarm_counter_runs_both_commands() {
        let client = client();
        let counter = client.alarm_counter().unwrap();

        assert_eq!(counter, AlarmCounter { red: 2, yellow: 2 });
        assert_eq!(
            client.channel().calls(),
            [
                "show system alarms | display xml",
                "show chassis alarms | display xml",
            ]
        );
    }

    #[test]
    fn test_alarm_counter_with_filter() {
        let filter = AlarmFilter::new("Fan").unwrap();
        let client = RpcClient::new(MockChannel::typical_router("r1"), filter);
        assert_eq!(
            client.alarm_counter().unwrap(),
            AlarmCounter { red: 1, yellow: 2 }
        );
    }

    #[test]
    fn test_alarm_counter_fails_on_second_command() {
        let mut channel = MockChannel::typical_router("r1");
        channel.fail_command(with_xml_output(commands::CHASSIS_ALARMS), "timeout");
        let client = RpcClient::new(channel, AlarmFilter::none());

        let err = client.alarm_counter().unwrap_err();
        assert!(err.is_transport());
        assert!(!err.is_unreachable());
        assert_eq!(err.command(), commands::CHASSIS_ALARMS);
    }

    #[test]
    fn test_domain_calls() {
        let client = client();

        assert_eq!(client.interface_stats().unwrap().len(), 5);
        assert_eq!(client.bgp_sessions().unwrap().len(), 3);
        assert_eq!(client.ospf_areas().unwrap().len(), 2);
        assert_eq!(
            client.isis_adjacencies().unwrap(),
            IsisAdjacencies { up: 2, total: 3 }
        );
        assert_eq!(client.routing_tables().unwrap().len(), 2);
        assert_eq!(client.route_engine_stats().unwrap().temperature, 38.0);
        assert_eq!(client.environment_items().unwrap().len(), 3);
        assert_eq!(client.interface_diagnostics().unwrap().len(), 2);
        assert_eq!(client.host(), "r1");
    }

    #[test]
    fn test_transport_error() {
        let client = RpcClient::new(MockChannel::unreachable("r9"), AlarmFilter::none());
        let err = client.bgp_sessions().unwrap_err();

        assert!(err.is_transport());
        assert!(err.is_unreachable());
        assert!(err.to_string().starts_with("`show bgp summary` failed"));
    }

    #[test]
    fn test_decode_error() {
        let mut channel = MockChannel::new("r1");
        channel.add_response(
            with_xml_output(commands::ISIS),
            "<rpc-reply><xnm:error><message>syntax error</message></xnm:error></rpc-reply>",
        );
        let client = RpcClient::new(channel, AlarmFilter::none());

        let err = client.isis_adjacencies().unwrap_err();
        assert!(!err.is_transport());
        assert!(matches!(err, RpcError::Decode { .. }));
    }

    #[test]
    fn test_truncate_reply() {
        assert_eq!(truncate_reply(b"<rpc-reply/>", 64), "<rpc-reply/>");
        assert_eq!(truncate_reply(b"abcdef", 3), "abc...");
        assert_eq!(truncate_reply("h\u{e9}llo".as_bytes(), 2), "h...");
        assert_eq!(truncate_reply(&[0xff, 0xfe], 8), "<non-utf8 reply>");
    }
}
